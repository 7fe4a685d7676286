//! Image decoder strategy definitions
//!
//! This module defines the strategy pattern for decoding uploaded images,
//! gating every decode behind the file-extension allow-list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::{debug, info, error};

use crate::color::errors::{PaletteError, PaletteResult};
use crate::utils::logger::Logger;

use super::pixel_buffer::PixelBuffer;
use super::raster_strategy::RasterDecoderStrategy;

lazy_static! {
    /// File extensions accepted for upload and decoding
    pub static ref ALLOWED_EXTENSIONS: HashSet<&'static str> =
        ["png", "jpg", "jpeg", "gif"].into_iter().collect();
}

/// Lowercased text after the last `.` of a file name
///
/// # Returns
/// `None` when the name has no `.` at all
pub fn file_extension(filename: &str) -> Option<String> {
    filename.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Check a file name against the extension allow-list
pub fn is_allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(ext.as_str()))
        .unwrap_or(false)
}

/// Strategy for decoding one family of image formats
pub trait DecoderStrategy {
    /// Decode in-memory image bytes into a pixel buffer
    ///
    /// # Arguments
    /// * `extension` - Lowercased extension the bytes were uploaded with
    /// * `bytes` - Encoded image data
    ///
    /// # Returns
    /// The decoded pixels or a `Decode` error
    fn decode(&self, extension: &str, bytes: &[u8]) -> PaletteResult<PixelBuffer>;

    /// Short human readable name used in logs
    fn name(&self) -> &'static str;
}

/// Factory for creating decoder strategies by file extension
pub struct DecoderStrategyFactory;

impl DecoderStrategyFactory {
    /// Create an appropriate strategy for the given file name
    ///
    /// # Returns
    /// A strategy that can decode the file, or `UnsupportedFormat`
    pub fn create_strategy(filename: &str) -> PaletteResult<Box<dyn DecoderStrategy>> {
        let extension = file_extension(filename).unwrap_or_default();
        debug!("Determining decoder for file extension: {:?}", extension);

        if !ALLOWED_EXTENSIONS.contains(extension.as_str()) {
            error!("Unsupported file format: {:?}", extension);
            return Err(PaletteError::UnsupportedFormat(
                if extension.is_empty() { filename.to_string() } else { extension }
            ));
        }

        Ok(Box::new(RasterDecoderStrategy::new()))
    }
}

/// Main decoder that delegates to the appropriate format strategy
pub struct ImageDecoder<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ImageDecoder<'a> {
    /// Create a new image decoder
    pub fn new(logger: &'a Logger) -> Self {
        ImageDecoder { logger }
    }

    /// Decode uploaded bytes
    ///
    /// The extension is checked before any decoding is attempted.
    ///
    /// # Arguments
    /// * `filename` - Name the bytes were uploaded with
    /// * `bytes` - Encoded image data
    pub fn decode_bytes(&self, filename: &str, bytes: &[u8]) -> PaletteResult<PixelBuffer> {
        let strategy = DecoderStrategyFactory::create_strategy(filename)?;
        let extension = file_extension(filename).unwrap_or_default();

        info!("Decoding {} ({} bytes) with {} decoder", filename, bytes.len(), strategy.name());
        let buffer = strategy.decode(&extension, bytes)?;

        self.logger.log(&format!(
            "Decoded {}: {}x{} with {} channels",
            filename, buffer.width, buffer.height, buffer.channels
        ))?;

        Ok(buffer)
    }

    /// Read and decode an image file
    pub fn decode_file(&self, path: &Path) -> PaletteResult<PixelBuffer> {
        let filename = path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Reject before touching the file system
        DecoderStrategyFactory::create_strategy(&filename)?;

        let bytes = fs::read(path)?;
        self.decode_bytes(&filename, &bytes)
    }
}
