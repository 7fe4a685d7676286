//! Color extraction command
//!
//! This module implements the command for ranking the colors of one or
//! more image files and optionally exporting the palette.

use std::path::Path;
use std::sync::Arc;
use clap::ArgMatches;
use log::{debug, info, error};

use crate::api::PaletteKit;
use crate::color::errors::{PaletteError, PaletteResult};
use crate::commands::command_traits::Command;
use crate::export::{export_colors, ExportEntry, ExportSink, FileExportSink, StdoutExportSink};
use crate::utils::progress::ProgressTracker;
use crate::view::{render_json_report, render_text_report, ImageReport};

/// Report formats understood by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    /// Parse a format name
    pub fn from_name(name: &str) -> PaletteResult<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(PaletteError::InvalidArgument(format!("Unsupported report format: {}", other))),
        }
    }
}

/// Command for extracting top colors from image files
pub struct ExtractCommand {
    /// Input image paths
    inputs: Vec<String>,
    /// Number of colors requested per image
    count: i64,
    /// Output format for the report
    format: ReportFormat,
    /// Export destination, `-` for standard output
    export: Option<String>,
    /// Library facade
    kit: Arc<PaletteKit>,
}

impl ExtractCommand {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, kit: Arc<PaletteKit>) -> PaletteResult<Self> {
        let inputs: Vec<String> = args.get_many::<String>("input")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        if inputs.is_empty() {
            return Err(PaletteError::InvalidArgument("Missing input image".to_string()));
        }
        info!("Input images: {:?}", inputs);

        // Negative counts are rejected by the extractor itself
        let count = match args.get_one::<String>("count") {
            Some(value) => value.parse::<i64>()
                .map_err(|_| PaletteError::InvalidArgument(format!("Invalid color count: {}", value)))?,
            None => kit.config().top_colors as i64,
        };
        debug!("Color count: {}", count);

        let format = match args.get_one::<String>("format") {
            Some(name) => ReportFormat::from_name(name)?,
            None => ReportFormat::Text,
        };

        let export = args.get_one::<String>("export").cloned();

        Ok(ExtractCommand {
            inputs,
            count,
            format,
            export,
            kit,
        })
    }

    /// Rank the colors of every input
    fn collect_reports(&self) -> PaletteResult<Vec<ImageReport>> {
        let progress = if self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, "Extracting colors")
        } else {
            ProgressTracker::hidden()
        };

        let mut reports = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            progress.set_message(input);

            let colors = match self.kit.extract_from_file(Path::new(input), self.count) {
                Ok(colors) => colors,
                Err(e) => {
                    error!("Failed to extract colors from {}: {}", input, e);
                    return Err(e);
                }
            };

            reports.push(ImageReport { source: input.clone(), colors });
            progress.increment(1);
        }
        progress.finish();

        Ok(reports)
    }

    /// Write the combined palette to the export destination
    fn export_reports(&self, target: &str, reports: &[ImageReport]) -> PaletteResult<()> {
        let entries: Vec<ExportEntry> = reports.iter()
            .flat_map(|report| report.colors.iter().map(ExportEntry::from))
            .collect();

        let sink: Box<dyn ExportSink> = if target == "-" {
            Box::new(StdoutExportSink)
        } else {
            Box::new(FileExportSink::new(target))
        };

        export_colors(&entries, sink.as_ref())
    }
}

impl Command for ExtractCommand {
    fn execute(&self) -> PaletteResult<()> {
        info!("Extracting up to {} colors from {} image(s)", self.count, self.inputs.len());

        let reports = self.collect_reports()?;

        let rendered = match self.format {
            ReportFormat::Text => render_text_report(&reports),
            ReportFormat::Json => render_json_report(&reports)?,
        };
        println!("{}", rendered.trim_end());

        if let Some(target) = &self.export {
            self.export_reports(target, &reports)?;
        }

        self.kit.logger().log("Color extraction completed successfully")?;
        Ok(())
    }
}
