//! Image file codec backed by the `image` crate.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use log::info;
use ndarray::Array3;

use super::ImageCodec;
use crate::error::{EditError, Result};
use crate::PixelBuffer;

/// Decodes any format the `image` crate supports into 8-bit RGB and encodes
/// by file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCodec;

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let img = image::open(path).map_err(|source| EditError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "loaded {} ({}x{})",
            path.display(),
            img.width(),
            img.height()
        );
        Ok(image_to_buffer(&img))
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        buffer_to_image(buffer)
            .save(path)
            .map_err(|source| EditError::ImageSave {
                path: path.to_path_buf(),
                source,
            })?;
        info!("saved {}", path.display());
        Ok(())
    }
}

/// Convert a decoded image to an RGB buffer (alpha is dropped).
fn image_to_buffer(img: &DynamicImage) -> PixelBuffer {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c]
    })
}

/// Convert a buffer to an image; single-channel buffers become `Luma8`.
fn buffer_to_image(buffer: &PixelBuffer) -> DynamicImage {
    let (height, width, channels) = buffer.dim();
    let (width, height) = (width as u32, height as u32);

    if channels < 3 {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            Luma([buffer[[y as usize, x as usize, 0]]])
        }))
    } else {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let (y, x) = (y as usize, x as usize);
            Rgb([buffer[[y, x, 0]], buffer[[y, x, 1]], buffer[[y, x, 2]]])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_png_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.png");
        let buffer = Array3::from_shape_fn((3, 4, 3), |(y, x, c)| (y * 50 + x * 10 + c) as u8);

        FileCodec.encode(&buffer, &path).unwrap();
        let decoded = FileCodec.decode(&path).unwrap();

        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_grayscale_buffer_decodes_as_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let buffer = Array3::<u8>::from_elem((2, 2, 1), 90);

        FileCodec.encode(&buffer, &path).unwrap();
        let decoded = FileCodec.decode(&path).unwrap();

        assert_eq!(decoded.dim(), (2, 2, 3));
        assert!(decoded.iter().all(|&v| v == 90));
    }

    #[test]
    fn test_alpha_is_dropped() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(2, 1, Rgba([10, 20, 30, 40])));

        let buffer = image_to_buffer(&img);

        assert_eq!(buffer.dim(), (1, 2, 3));
        assert_eq!(buffer[[0, 1, 2]], 30);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempdir().unwrap();
        let err = FileCodec.decode(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, EditError::ImageLoad { .. }));
    }

    #[test]
    fn test_unwritable_destination_is_save_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");
        let buffer = Array3::<u8>::zeros((1, 1, 3));

        let err = FileCodec.encode(&buffer, &path).unwrap_err();

        assert!(matches!(err, EditError::ImageSave { .. }));
    }
}
