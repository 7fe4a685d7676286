//! Color value types
//!
//! `RgbColor` is the display-facing triple with hex helpers, `ColorRecord`
//! is one ranked entry produced by frequency extraction.

use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

use crate::color::errors::{PaletteError, PaletteResult};

/// Simple RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    /// Build a color from the first three samples of a pixel
    ///
    /// # Returns
    /// `None` when the pixel has fewer than three channels
    pub fn from_channels(channels: &[u8]) -> Option<Self> {
        match channels {
            [r, g, b, ..] => Some(RgbColor::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Convert to hex string (#rrggbb format, lowercase)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Create from hex string
    ///
    /// # Arguments
    /// * `hex` - Hex color string (with or without # prefix)
    ///
    /// # Returns
    /// A Result containing the parsed RgbColor or an error
    pub fn from_hex(hex: &str) -> PaletteResult<Self> {
        let digits = hex.trim().trim_start_matches('#');

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(PaletteError::InvalidArgument(
                format!("Invalid hex color code: {} - must be 6 hexadecimal digits", hex)
            ));
        }

        let r = parse_hex_component(&digits[0..2], hex)?;
        let g = parse_hex_component(&digits[2..4], hex)?;
        let b = parse_hex_component(&digits[4..6], hex)?;

        Ok(RgbColor { r, g, b })
    }

    /// Components as an array, in R, G, B order
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn parse_hex_component(component: &str, full: &str) -> PaletteResult<u8> {
    u8::from_str_radix(component, 16).map_err(|_| {
        PaletteError::InvalidArgument(format!("Invalid hex color code: {}", full))
    })
}

/// One distinct color of an image and how often it occurs
///
/// Equality and hashing only look at `channels`; the RGB triple and hex
/// string are derived from it and `count` describes the source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Raw channel values, one per channel of the source buffer
    pub channels: Vec<u8>,
    /// First three channels
    pub rgb: RgbColor,
    /// `#rrggbb` built from `rgb`
    pub hex: String,
    /// Number of pixels with exactly these channel values
    pub count: u64,
}

impl ColorRecord {
    /// Create a record from a channel tuple and its pixel count
    ///
    /// # Returns
    /// An `InvalidImage` error when the tuple has fewer than three channels
    pub fn new(channels: &[u8], count: u64) -> PaletteResult<Self> {
        let rgb = RgbColor::from_channels(channels).ok_or_else(|| {
            PaletteError::InvalidImage(format!(
                "RGB extraction needs at least 3 channels, got {}", channels.len()
            ))
        })?;

        Ok(ColorRecord {
            channels: channels.to_vec(),
            rgb,
            hex: rgb.to_hex(),
            count,
        })
    }
}

impl PartialEq for ColorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
    }
}

impl Eq for ColorRecord {}

impl Hash for ColorRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels.hash(state);
    }
}
