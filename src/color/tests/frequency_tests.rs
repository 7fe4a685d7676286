//! Tests for color frequency extraction

extern crate std;

use std::collections::HashSet;

use crate::color::errors::PaletteError;
use crate::color::frequency::{extract_top_colors, ColorFrequencyExtractor};
use crate::color::record::RgbColor;
use crate::decoder::PixelBuffer;
use super::test_utils::{noisy_rgba, rgb_row, two_by_two_rgb};

#[test]
fn test_red_ranks_first_and_tie_resolves_ascending() {
    let colors = extract_top_colors(&two_by_two_rgb(), 2).unwrap();

    std::assert_eq!(colors.len(), 2);
    std::assert_eq!(colors[0].rgb, RgbColor::new(255, 0, 0));
    std::assert_eq!(colors[0].hex, "#ff0000");
    std::assert_eq!(colors[0].count, 2);

    // Green and blue both occur once; (0, 0, 255) sorts before (0, 255, 0)
    std::assert_eq!(colors[1].channels, vec![0, 0, 255]);
    std::assert_eq!(colors[1].hex, "#0000ff");
    std::assert_eq!(colors[1].count, 1);
}

#[test]
fn test_fewer_distinct_colors_than_requested() {
    let colors = extract_top_colors(&two_by_two_rgb(), 10).unwrap();
    std::assert_eq!(colors.len(), 3);
}

#[test]
fn test_zero_requested_yields_empty() {
    let colors = extract_top_colors(&two_by_two_rgb(), 0).unwrap();
    std::assert!(colors.is_empty());
}

#[test]
fn test_negative_count_is_invalid_argument() {
    let result = extract_top_colors(&two_by_two_rgb(), -1);
    std::assert!(matches!(result, Err(PaletteError::InvalidArgument(_))));
}

#[test]
fn test_two_channel_buffer_is_invalid_image() {
    let buffer = PixelBuffer::new(2, 2, 2, vec![0; 8]).unwrap();
    let result = extract_top_colors(&buffer, 3);
    std::assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
}

#[test]
fn test_overflowing_shape_is_invalid_image() {
    let buffer = PixelBuffer { height: usize::MAX, width: 2, channels: 3, data: vec![0; 6] };
    let result = extract_top_colors(&buffer, 3);
    std::assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
}

#[test]
fn test_sample_count_mismatch_is_invalid_image() {
    let buffer = PixelBuffer { height: 2, width: 2, channels: 3, data: vec![0; 9] };
    let result = extract_top_colors(&buffer, 3);
    std::assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
}

#[test]
fn test_empty_spatial_dimension_is_invalid_image() {
    let buffer = PixelBuffer::new(0, 4, 3, Vec::new()).unwrap();
    let result = extract_top_colors(&buffer, 3);
    std::assert!(matches!(result, Err(PaletteError::InvalidImage(_))));
}

#[test]
fn test_single_pixel_image() {
    let buffer = rgb_row(&[[12, 34, 56]]);
    let colors = extract_top_colors(&buffer, 5).unwrap();

    std::assert_eq!(colors.len(), 1);
    std::assert_eq!(colors[0].count, 1);
    std::assert_eq!(colors[0].hex, "#0c2238");
}

#[test]
fn test_uniform_image_counts_every_pixel() {
    let buffer = PixelBuffer::new(3, 5, 3, [9u8, 9, 9].repeat(15)).unwrap();
    let colors = extract_top_colors(&buffer, 5).unwrap();

    std::assert_eq!(colors.len(), 1);
    std::assert_eq!(colors[0].count, 15);
}

#[test]
fn test_alpha_channel_distinguishes_colors() {
    let data = vec![
        1, 2, 3, 255,
        1, 2, 3, 0,
        1, 2, 3, 255,
    ];
    let buffer = PixelBuffer::new(1, 3, 4, data).unwrap();
    let colors = extract_top_colors(&buffer, 10).unwrap();

    std::assert_eq!(colors.len(), 2);
    std::assert_eq!(colors[0].channels, vec![1, 2, 3, 255]);
    std::assert_eq!(colors[0].count, 2);
    // Both records share the same RGB part but stay distinct
    std::assert_eq!(colors[0].hex, colors[1].hex);
}

#[test]
fn test_ranking_properties_on_noisy_images() {
    for seed in [1u32, 7, 42, 1234] {
        let buffer = noisy_rgba(16, 24, 40, seed);
        let colors = extract_top_colors(&buffer, 25).unwrap();

        std::assert!(colors.len() <= 25);

        for pair in colors.windows(2) {
            std::assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                std::assert!(pair[0].channels < pair[1].channels);
            }
        }

        let unique: HashSet<_> = colors.iter().map(|c| c.channels.clone()).collect();
        std::assert_eq!(unique.len(), colors.len());

        for color in &colors {
            let parsed = RgbColor::from_hex(&color.hex).unwrap();
            std::assert_eq!(parsed.to_array(), [color.channels[0], color.channels[1], color.channels[2]]);
        }
    }
}

#[test]
fn test_counts_sum_to_pixel_count_when_all_colors_returned() {
    let buffer = noisy_rgba(10, 10, 12, 99);
    let colors = extract_top_colors(&buffer, 100).unwrap();
    let total: u64 = colors.iter().map(|c| c.count).sum();
    std::assert_eq!(total, 100);
}

#[test]
fn test_extractor_uses_configured_count() {
    let extractor = ColorFrequencyExtractor::new(1);
    let colors = extractor.extract(&two_by_two_rgb()).unwrap();
    std::assert_eq!(colors.len(), 1);
    std::assert_eq!(ColorFrequencyExtractor::default().top_n(), 10);
}
