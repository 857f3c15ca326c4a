//! Core convolution primitive shared by all spatial filters.
//!
//! This module provides:
//! - Reflect padding (mirror about the border sample, border not repeated)
//! - Generic 2D convolution over 2D or 3D images
//!
//! Each output element is an independent weighted sum, so rows are computed
//! in parallel with rayon. The summation order inside one element is fixed,
//! so results do not depend on scheduling.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};
use rayon::prelude::*;

use crate::error::KernelSizeError;

/// Map a possibly out-of-range index onto `0..len` by reflection.
///
/// `-1` maps to `1`, `len` maps to `len - 2`, and so on.
#[inline]
fn reflect_index(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let len = len as isize;
    let period = 2 * (len - 1);
    let i = i.rem_euclid(period);
    (if i >= len { period - i } else { i }) as usize
}

/// Pad an image by `pad_y` rows and `pad_x` columns on every side.
///
/// # Arguments
/// * `image` - Image (height, width, channels)
/// * `pad_y` - Rows added above and below
/// * `pad_x` - Columns added left and right
///
/// # Returns
/// Padded image (height + 2 * pad_y, width + 2 * pad_x, channels)
pub fn pad_reflect(image: ArrayView3<f64>, pad_y: usize, pad_x: usize) -> Array3<f64> {
    let (height, width, channels) = image.dim();
    Array3::from_shape_fn(
        (height + 2 * pad_y, width + 2 * pad_x, channels),
        |(y, x, c)| {
            let sy = reflect_index(y as isize - pad_y as isize, height);
            let sx = reflect_index(x as isize - pad_x as isize, width);
            image[[sy, sx, c]]
        },
    )
}

/// Fails if a `(rows, cols)` kernel does not fit inside a `(height, width)` image.
pub fn check_kernel_size(
    (kernel_height, kernel_width): (usize, usize),
    (image_height, image_width): (usize, usize),
) -> Result<(), KernelSizeError> {
    if kernel_height > image_height || kernel_width > image_width {
        return Err(KernelSizeError::KernelTooLarge {
            kernel_height,
            kernel_width,
            image_height,
            image_width,
        });
    }
    Ok(())
}

/// Convolve every channel of an image with a 2D kernel.
///
/// The image is reflect-padded by half the kernel size, so the output has
/// the same shape as the input. The kernel is applied as is (no flip).
///
/// # Errors
/// [`KernelSizeError::KernelTooLarge`] if the kernel is taller or wider than
/// the unpadded image.
pub fn convolve(
    image: ArrayView3<f64>,
    kernel: ArrayView2<f64>,
) -> Result<Array3<f64>, KernelSizeError> {
    let (height, width, channels) = image.dim();
    let (kernel_height, kernel_width) = kernel.dim();

    check_kernel_size((kernel_height, kernel_width), (height, width))?;

    let padded = pad_reflect(image, kernel_height / 2, kernel_width / 2);
    let mut output = Array3::<f64>::zeros((height, width, channels));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                for c in 0..channels {
                    let mut sum = 0.0f64;
                    for ky in 0..kernel_height {
                        for kx in 0..kernel_width {
                            sum += kernel[[ky, kx]] * padded[[y + ky, x + kx, c]];
                        }
                    }
                    row[[x, c]] = sum;
                }
            }
        });

    Ok(output)
}

/// Convolve a single-channel image.
///
/// The plane is viewed as (height, width, 1), convolved, and the channel
/// axis is removed again.
pub fn convolve_2d(
    image: ArrayView2<f64>,
    kernel: ArrayView2<f64>,
) -> Result<Array2<f64>, KernelSizeError> {
    let result = convolve(image.insert_axis(Axis(2)), kernel)?;
    Ok(result.index_axis_move(Axis(2), 0))
}
