//! Command line reports

use serde::Serialize;

use crate::color::errors::{PaletteError, PaletteResult};
use crate::color::record::ColorRecord;

/// Extraction result for one input image
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    /// Input the colors were extracted from
    pub source: String,
    /// Ranked colors, most frequent first
    pub colors: Vec<ColorRecord>,
}

/// Render reports as aligned plain text
pub fn render_text_report(reports: &[ImageReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str(&format!("{}: {} colors\n", report.source, report.colors.len()));
        for (rank, record) in report.colors.iter().enumerate() {
            let rgb = record.rgb;
            out.push_str(&format!(
                "{:>4}. {}  RGB: ({}, {}, {})  pixels: {}\n",
                rank + 1, record.hex, rgb.r, rgb.g, rgb.b, record.count
            ));
        }
    }

    out
}

/// Render reports as pretty-printed JSON
pub fn render_json_report(reports: &[ImageReport]) -> PaletteResult<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| PaletteError::GenericError(format!("Failed to serialize report: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ImageReport> {
        vec![ImageReport {
            source: "cat.png".to_string(),
            colors: vec![ColorRecord::new(&[255, 128, 0], 42).unwrap()],
        }]
    }

    #[test]
    fn test_text_report_lines() {
        let text = render_text_report(&sample());
        assert_eq!(text, "cat.png: 1 colors\n   1. #ff8000  RGB: (255, 128, 0)  pixels: 42\n");
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json_report(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let color = &value[0]["colors"][0];

        assert_eq!(value[0]["source"], "cat.png");
        assert_eq!(color["hex"], "#ff8000");
        assert_eq!(color["count"], 42);
        assert_eq!(color["rgb"]["g"], 128);
        assert_eq!(color["channels"], serde_json::json!([255, 128, 0]));
    }
}
