//! Tests for the color value types

extern crate std;

use std::collections::HashSet;

use crate::color::errors::PaletteError;
use crate::color::record::{ColorRecord, RgbColor};

#[test]
fn test_hex_is_lowercase_and_zero_padded() {
    std::assert_eq!(RgbColor::new(0, 10, 171).to_hex(), "#000aab");
}

#[test]
fn test_from_hex_accepts_optional_prefix_and_uppercase() {
    std::assert_eq!(RgbColor::from_hex("#FF8000").unwrap(), RgbColor::new(255, 128, 0));
    std::assert_eq!(RgbColor::from_hex("ff8000").unwrap(), RgbColor::new(255, 128, 0));
}

#[test]
fn test_from_hex_rejects_bad_input() {
    std::assert!(RgbColor::from_hex("#fff").is_err());
    std::assert!(RgbColor::from_hex("#gg0000").is_err());
    std::assert!(RgbColor::from_hex("#ééé").is_err());
}

#[test]
fn test_record_uses_first_three_channels() {
    let record = ColorRecord::new(&[16, 32, 48, 128], 3).unwrap();
    std::assert_eq!(record.rgb, RgbColor::new(16, 32, 48));
    std::assert_eq!(record.hex, "#102030");
    std::assert_eq!(record.channels.len(), 4);
}

#[test]
fn test_record_needs_three_channels() {
    let result = ColorRecord::new(&[1, 2], 1);
    std::assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
}

#[test]
fn test_record_equality_ignores_count() {
    let a = ColorRecord::new(&[1, 2, 3], 5).unwrap();
    let b = ColorRecord::new(&[1, 2, 3], 9).unwrap();
    let c = ColorRecord::new(&[1, 2, 3, 0], 5).unwrap();

    std::assert_eq!(a, b);
    std::assert_ne!(a, c);

    let set: HashSet<ColorRecord> = [a, b, c].into_iter().collect();
    std::assert_eq!(set.len(), 2);
}
