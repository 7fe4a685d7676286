//! Image decoding for uploaded files
//!
//! This module turns encoded image bytes into pixel buffers using a
//! strategy pattern keyed on the file extension.

mod pixel_buffer;
mod decoder_strategy;
mod raster_strategy;

pub use pixel_buffer::PixelBuffer;
pub use decoder_strategy::{
    DecoderStrategy, DecoderStrategyFactory, ImageDecoder,
    ALLOWED_EXTENSIONS, file_extension, is_allowed_file,
};
pub use raster_strategy::RasterDecoderStrategy;
