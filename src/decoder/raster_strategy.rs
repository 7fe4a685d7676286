//! Raster decoder strategy implementation
//!
//! Decodes PNG, JPEG and GIF data with the `image` crate. Animated GIFs
//! contribute their first frame only.

use image::ImageFormat;
use log::debug;

use crate::color::errors::{PaletteError, PaletteResult};

use super::decoder_strategy::DecoderStrategy;
use super::pixel_buffer::PixelBuffer;

/// Strategy for the common raster formats handled by the `image` crate
pub struct RasterDecoderStrategy;

impl RasterDecoderStrategy {
    /// Create a new raster strategy
    pub fn new() -> Self {
        RasterDecoderStrategy
    }

    /// Map an allow-listed extension to the format it implies
    fn format_for(extension: &str) -> PaletteResult<ImageFormat> {
        match extension {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "gif" => Ok(ImageFormat::Gif),
            other => Err(PaletteError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Default for RasterDecoderStrategy {
    fn default() -> Self {
        RasterDecoderStrategy::new()
    }
}

impl DecoderStrategy for RasterDecoderStrategy {
    fn decode(&self, extension: &str, bytes: &[u8]) -> PaletteResult<PixelBuffer> {
        let format = Self::format_for(extension)?;

        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| PaletteError::Decode(e.to_string()))?;
        debug!("Decoded {:?} image with color type {:?}", format, image.color());

        Ok(PixelBuffer::from_image(&image))
    }

    fn name(&self) -> &'static str {
        "raster"
    }
}
