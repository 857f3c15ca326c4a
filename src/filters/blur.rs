//! Box blur built on the convolution primitive.
//!
//! The window is summed with a kernel of ones and divided by its area
//! afterwards, so integer sums stay exact before quantization.

use ndarray::{Array2, Array3, ArrayView3};

use super::core::{check_kernel_size, convolve};
use super::grayscale::{quantize, u8_to_f64};
use crate::error::KernelSizeError;

/// Apply box blur.
///
/// # Arguments
/// * `input` - Image with 1 or 3 channels (height, width, channels)
/// * `x` - Kernel rows
/// * `y` - Kernel columns
///
/// # Returns
/// Blurred image with the same shape. `x = y = 1` returns the input.
pub fn box_blur(input: ArrayView3<u8>, x: usize, y: usize) -> Result<Array3<u8>, KernelSizeError> {
    if x == 0 || y == 0 {
        return Err(KernelSizeError::UnspecifiedKernelSize);
    }
    let (height, width, _) = input.dim();
    check_kernel_size((x, y), (height, width))?;

    let area = (x * y) as f64;
    let sums = convolve(u8_to_f64(input).view(), Array2::<f64>::ones((x, y)).view())?;
    Ok(sums.mapv(|v| quantize(v / area)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| (y * 20 + x * 7 + c * 3) as u8)
    }

    #[test]
    fn test_mean_is_truncated() {
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        img[[1, 1, 0]] = 95;

        let result = box_blur(img.view(), 3, 3).unwrap();

        // 95 / 9 = 10.56
        assert_eq!(result[[1, 1, 0]], 10);
    }

    #[test]
    fn test_unit_kernel_is_identity() {
        let img = gradient(5, 6);
        let result = box_blur(img.view(), 1, 1).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_flat_image_unchanged() {
        let img = Array3::<u8>::from_elem((6, 6, 3), 100);
        let result = box_blur(img.view(), 3, 3).unwrap();
        assert!(result.iter().all(|&v| v == 100));
    }

    #[test]
    fn test_blur_averages_neighbors() {
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        img[[1, 1, 0]] = 90;

        let result = box_blur(img.view(), 3, 3).unwrap();

        assert_eq!(result[[1, 1, 0]], 10);
    }

    #[test]
    fn test_zero_size_fails() {
        let img = gradient(4, 4);
        assert_eq!(
            box_blur(img.view(), 0, 3),
            Err(KernelSizeError::UnspecifiedKernelSize)
        );
        assert_eq!(
            box_blur(img.view(), 3, 0),
            Err(KernelSizeError::UnspecifiedKernelSize)
        );
    }

    #[test]
    fn test_kernel_larger_than_image_fails() {
        let img = gradient(4, 8);
        assert!(matches!(
            box_blur(img.view(), 5, 3),
            Err(KernelSizeError::KernelTooLarge { .. })
        ));
    }

    #[test]
    fn test_huge_kernel_fails_before_allocating() {
        let img = Array3::<u8>::zeros((4, 4, 3));
        assert_eq!(
            box_blur(img.view(), usize::MAX, usize::MAX),
            Err(KernelSizeError::KernelTooLarge {
                kernel_height: usize::MAX,
                kernel_width: usize::MAX,
                image_height: 4,
                image_width: 4,
            })
        );
        assert!(matches!(
            box_blur(img.view(), 100_000, 2),
            Err(KernelSizeError::KernelTooLarge { .. })
        ));
    }
}
