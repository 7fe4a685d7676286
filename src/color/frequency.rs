//! Color frequency extraction
//!
//! Counts every distinct channel tuple of a pixel buffer and ranks the
//! tuples by how many pixels use them. Colors with equal counts are ordered
//! ascending by their channel tuple so the ranking is deterministic.

use std::cmp::Ordering;
use std::collections::HashMap;
use log::debug;

use crate::color::errors::{PaletteError, PaletteResult};
use crate::color::record::ColorRecord;
use crate::decoder::PixelBuffer;

/// Number of colors reported when the caller does not ask for a specific count
pub const DEFAULT_TOP_COLORS: usize = 10;

/// Extract the `n` most frequent colors of a pixel buffer
///
/// # Arguments
/// * `pixels` - Decoded pixel buffer with at least 3 channels
/// * `n` - Maximum number of colors to return; must not be negative
///
/// # Returns
/// Up to `n` distinct colors, most frequent first, or
/// `InvalidArgument` for a negative `n` and `InvalidImage` for an unusable buffer
pub fn extract_top_colors(pixels: &PixelBuffer, n: i64) -> PaletteResult<Vec<ColorRecord>> {
    let n = usize::try_from(n).map_err(|_| {
        PaletteError::InvalidArgument(format!("Color count must not be negative, got {}", n))
    })?;

    ColorFrequencyExtractor::new(n).extract(pixels)
}

/// Ranks the colors of pixel buffers, keeping a fixed number of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFrequencyExtractor {
    top_n: usize,
}

impl Default for ColorFrequencyExtractor {
    fn default() -> Self {
        ColorFrequencyExtractor::new(DEFAULT_TOP_COLORS)
    }
}

impl ColorFrequencyExtractor {
    /// Create an extractor returning at most `top_n` colors
    pub fn new(top_n: usize) -> Self {
        ColorFrequencyExtractor { top_n }
    }

    /// Maximum number of colors returned by `extract`
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank the colors of `pixels`
    ///
    /// # Returns
    /// Up to `top_n` records sorted by descending count
    pub fn extract(&self, pixels: &PixelBuffer) -> PaletteResult<Vec<ColorRecord>> {
        validate_buffer(pixels)?;

        let counts = count_colors(pixels);
        debug!("Counted {} distinct colors across {} pixels",
               counts.len(), pixels.pixel_count());

        let mut ranked: Vec<(&[u8], u64)> = counts.into_iter().collect();
        ranked.sort_by(compare_frequency);
        ranked.truncate(self.top_n);

        ranked.into_iter()
            .map(|(channels, count)| ColorRecord::new(channels, count))
            .collect()
    }
}

/// Check that a buffer has pixels and enough channels for RGB output
fn validate_buffer(pixels: &PixelBuffer) -> PaletteResult<()> {
    if pixels.is_empty() {
        return Err(PaletteError::InvalidImage(format!(
            "Image must have at least one pixel, got {}x{}", pixels.width, pixels.height
        )));
    }

    if pixels.channels < 3 {
        return Err(PaletteError::InvalidImage(format!(
            "RGB extraction needs at least 3 channels, got {}", pixels.channels
        )));
    }

    let expected = pixels.expected_len().ok_or_else(|| PaletteError::InvalidImage(format!(
        "Buffer shape {}x{}x{} overflows", pixels.height, pixels.width, pixels.channels
    )))?;

    if pixels.data.len() != expected {
        return Err(PaletteError::InvalidImage(format!(
            "Buffer holds {} samples, shape needs {}", pixels.data.len(), expected
        )));
    }

    Ok(())
}

/// Count how many pixels use each distinct channel tuple
fn count_colors(pixels: &PixelBuffer) -> HashMap<&[u8], u64> {
    let mut counts: HashMap<&[u8], u64> = HashMap::new();
    for pixel in pixels.pixels() {
        *counts.entry(pixel).or_insert(0) += 1;
    }
    counts
}

/// Higher counts first; equal counts ascending by channel tuple
fn compare_frequency(a: &(&[u8], u64), b: &(&[u8], u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
