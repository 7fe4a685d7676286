//! Decoded pixel data
//!
//! A `PixelBuffer` is the 3-D sample array (height x width x channels)
//! that color extraction works on. Samples are stored row-major with the
//! channels of each pixel interleaved.

use image::DynamicImage;

use crate::color::errors::{PaletteError, PaletteResult};

/// Represents the pixel samples of a decoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Samples per pixel
    pub channels: usize,
    /// Raw sample values in row-major, channel-interleaved order
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw samples
    ///
    /// # Arguments
    /// * `height` - Number of rows
    /// * `width` - Number of columns
    /// * `channels` - Samples per pixel
    /// * `data` - `height * width * channels` samples
    ///
    /// # Returns
    /// The buffer, or `InvalidImage` when the sample count does not match the shape
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> PaletteResult<Self> {
        let expected = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| PaletteError::InvalidImage(
                format!("Buffer shape {}x{}x{} overflows", height, width, channels)
            ))?;

        if data.len() != expected {
            return Err(PaletteError::InvalidImage(format!(
                "Expected {} samples for shape {}x{}x{}, got {}",
                expected, height, width, channels, data.len()
            )));
        }

        Ok(PixelBuffer { height, width, channels, data })
    }

    /// Create a buffer from a list of pixels laid out as one row per `width` pixels
    ///
    /// Every pixel must have the same number of channels.
    pub fn from_pixels(height: usize, width: usize, pixels: &[&[u8]]) -> PaletteResult<Self> {
        let channels = pixels.first().map(|p| p.len()).unwrap_or(0);
        if pixels.iter().any(|p| p.len() != channels) {
            return Err(PaletteError::InvalidImage(
                "All pixels must have the same channel count".to_string()
            ));
        }

        let data = pixels.iter().flat_map(|p| p.iter().copied()).collect();
        PixelBuffer::new(height, width, channels, data)
    }

    /// Create a buffer from a decoded image, keeping its native channel layout
    ///
    /// Gray, gray+alpha, RGB and RGBA sources keep 1, 2, 3 and 4 channels.
    /// Sources with 16-bit or floating point samples are narrowed to 8 bits.
    pub fn from_image(image: &DynamicImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;

        let (channels, data) = match image.color().channel_count() {
            1 => (1, image.to_luma8().into_raw()),
            2 => (2, image.to_luma_alpha8().into_raw()),
            3 => (3, image.to_rgb8().into_raw()),
            _ => (4, image.to_rgba8().into_raw()),
        };

        PixelBuffer { height, width, channels, data }
    }

    /// Total number of pixels, saturating at `usize::MAX`
    pub fn pixel_count(&self) -> usize {
        self.height.saturating_mul(self.width)
    }

    /// Number of samples the shape calls for, or None if it overflows
    pub fn expected_len(&self) -> Option<usize> {
        self.height.checked_mul(self.width)?.checked_mul(self.channels)
    }

    /// Whether the buffer has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    /// Get the samples of one pixel
    ///
    /// # Returns
    /// The channel values at (`x`, `y`), or None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height || self.channels == 0 {
            return None;
        }

        let start = y.checked_mul(self.width)?
            .checked_add(x)?
            .checked_mul(self.channels)?;
        self.data.get(start..start.checked_add(self.channels)?)
    }

    /// Iterate over all pixels as channel slices, row by row
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, GrayImage, Luma};

    #[test]
    fn test_new_rejects_mismatched_length() {
        let result = PixelBuffer::new(2, 2, 3, vec![0; 11]);
        assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let result = PixelBuffer::new(usize::MAX, 2, 3, vec![0; 6]);
        assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
    }

    #[test]
    fn test_hand_built_overflowing_shape_does_not_panic() {
        let buffer = PixelBuffer { height: usize::MAX, width: 2, channels: 3, data: vec![0; 6] };
        assert_eq!(buffer.expected_len(), None);
        assert_eq!(buffer.pixel_count(), usize::MAX);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.get(1, usize::MAX - 1), None);
    }

    #[test]
    fn test_from_pixels_rejects_ragged_input() {
        let result = PixelBuffer::from_pixels(1, 2, &[&[1, 2, 3], &[4, 5]]);
        assert!(matches!(result, Err(PaletteError::InvalidImage(_))));

        let empty = PixelBuffer::from_pixels(0, 0, &[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_reads_interleaved_samples() {
        let buffer = PixelBuffer::new(1, 2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buffer.get(1, 0), Some(&[4u8, 5, 6][..]));
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.pixels().count(), 2);
    }

    #[test]
    fn test_from_image_keeps_rgb_layout() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(2, 1, Rgb([10, 20, 30]));
        let buffer = PixelBuffer::from_image(&DynamicImage::ImageRgb8(img));

        assert_eq!((buffer.height, buffer.width, buffer.channels), (2, 3, 3));
        assert_eq!(buffer.get(2, 1), Some(&[10u8, 20, 30][..]));
    }

    #[test]
    fn test_from_image_keeps_gray_layout() {
        let img = GrayImage::from_pixel(2, 2, Luma([7]));
        let buffer = PixelBuffer::from_image(&DynamicImage::ImageLuma8(img));
        assert_eq!(buffer.channels, 1);
        assert_eq!(buffer.data, vec![7; 4]);
    }
}
