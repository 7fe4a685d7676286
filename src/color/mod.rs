//! Color frequency analysis
//!
//! This module ranks the distinct colors of a decoded image and
//! provides the color value types used across the crate.

pub mod errors;
pub mod record;
pub mod frequency;
#[cfg(test)]
mod tests;

pub use errors::{PaletteError, PaletteResult};
pub use record::{ColorRecord, RgbColor};
pub use frequency::{extract_top_colors, ColorFrequencyExtractor, DEFAULT_TOP_COLORS};
