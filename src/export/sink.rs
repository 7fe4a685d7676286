//! Palette export sinks
//!
//! A palette is exported as plain text, one `RGB: (r, g, b), HEX: #rrggbb`
//! line per color, and handed to a sink that delivers it somewhere.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use log::info;
use serde::{Deserialize, Serialize};

use crate::color::errors::{PaletteError, PaletteResult};
use crate::color::record::ColorRecord;

/// One exported color as exchanged with clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    /// Channel values shown as the RGB tuple
    pub rgb: Vec<u8>,
    /// `#rrggbb` hex code
    pub hex: String,
}

impl From<&ColorRecord> for ExportEntry {
    fn from(record: &ColorRecord) -> Self {
        ExportEntry {
            rgb: record.rgb.to_array().to_vec(),
            hex: record.hex.clone(),
        }
    }
}

/// Format entries as export text, one line per color
pub fn format_export_text(entries: &[ExportEntry]) -> String {
    entries.iter()
        .map(|entry| {
            let tuple = entry.rgb.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("RGB: ({}), HEX: {}\n", tuple, entry.hex)
        })
        .collect()
}

/// Destination for exported palette text
pub trait ExportSink: Send + Sync {
    /// Hand the formatted text to the destination
    fn deliver(&self, text: &str) -> PaletteResult<()>;

    /// Where the text goes, for log and user messages
    fn describe(&self) -> String;
}

/// Writes the export to a file, replacing any previous content
#[derive(Debug, Clone)]
pub struct FileExportSink {
    path: PathBuf,
}

impl FileExportSink {
    /// Create a sink targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileExportSink { path: path.into() }
    }
}

impl ExportSink for FileExportSink {
    fn deliver(&self, text: &str) -> PaletteResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Prints the export to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutExportSink;

impl ExportSink for StdoutExportSink {
    fn deliver(&self, text: &str) -> PaletteResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "standard output".to_string()
    }
}

/// Format a palette and deliver it through `sink`
///
/// # Returns
/// `InvalidArgument` when there is nothing to export
pub fn export_colors(entries: &[ExportEntry], sink: &dyn ExportSink) -> PaletteResult<()> {
    if entries.is_empty() {
        return Err(PaletteError::InvalidArgument("No colors data provided".to_string()));
    }

    let text = format_export_text(entries);
    sink.deliver(&text)?;
    info!("Exported {} colors to {}", entries.len(), sink.describe());

    Ok(())
}
