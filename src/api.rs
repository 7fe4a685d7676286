use std::path::Path;
use log::{info, warn, error};

use crate::color::errors::PaletteResult;
use crate::color::frequency::{extract_top_colors, ColorFrequencyExtractor};
use crate::color::record::ColorRecord;
use crate::config::AppConfig;
use crate::decoder::{is_allowed_file, ImageDecoder};
use crate::export::{export_colors, ExportEntry, ExportSink, FileExportSink};
use crate::notify::{ContactSubmission, Notifier};
use crate::upload::UploadStore;
use crate::utils::logger::Logger;

/// Why an upload was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// The request carried no image field
    MissingFile,
    /// The image field had an empty file name
    EmptyFilename,
    /// The file extension is not on the allow-list
    NotAllowed,
    /// Decoding, extraction or storage failed
    Processing(String),
}

impl UploadRejection {
    /// Short code used to carry the rejection across a redirect
    pub fn code(&self) -> &'static str {
        match self {
            UploadRejection::MissingFile => "no-file",
            UploadRejection::EmptyFilename => "no-selection",
            UploadRejection::NotAllowed => "not-allowed",
            UploadRejection::Processing(_) => "processing",
        }
    }

    /// Message shown for a code produced by `code`
    pub fn message_for_code(code: &str) -> Option<&'static str> {
        match code {
            "no-file" => Some("No file part"),
            "no-selection" => Some("No selected file"),
            "not-allowed" => Some("File not allowed"),
            "processing" => Some("Failed to process image"),
            _ => None,
        }
    }

    /// Message for a code, with the failure detail appended for processing errors
    pub fn message_for(code: &str, detail: Option<&str>) -> Option<String> {
        let base = Self::message_for_code(code)?;
        match detail {
            Some(detail) if code == "processing" && !detail.is_empty() => Some(format!("{}: {}", base, detail)),
            _ => Some(base.to_string()),
        }
    }

    /// Failure detail carried by a processing rejection
    pub fn detail(&self) -> Option<&str> {
        match self {
            UploadRejection::Processing(detail) => Some(detail),
            _ => None,
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> String {
        Self::message_for(self.code(), self.detail()).unwrap_or_default()
    }
}

/// A successfully processed upload
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Name the file was stored under
    pub stored_name: String,
    /// Ranked colors of the image
    pub colors: Vec<ColorRecord>,
}

/// Result of a contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The transport accepted the message
    Sent,
    /// The transport failed; the failure was logged
    Failed,
    /// The submission was incomplete
    Invalid,
}

impl ContactOutcome {
    /// Short code used to carry the outcome across a redirect
    pub fn code(&self) -> &'static str {
        match self {
            ContactOutcome::Sent => "sent",
            ContactOutcome::Failed => "failed",
            ContactOutcome::Invalid => "invalid",
        }
    }

    /// Parse a code produced by `code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sent" => Some(ContactOutcome::Sent),
            "failed" => Some(ContactOutcome::Failed),
            "invalid" => Some(ContactOutcome::Invalid),
            _ => None,
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            ContactOutcome::Sent => "Successfully sent your message!",
            ContactOutcome::Failed => "Unable to send email, please try again later",
            ContactOutcome::Invalid => "Please fill in every field with a valid email address",
        }
    }
}

/// Main interface to the palettekit library
pub struct PaletteKit {
    logger: Logger,
    config: AppConfig,
    uploads: UploadStore,
    notifier: Notifier,
    export_sink: Box<dyn ExportSink>,
}

impl PaletteKit {
    /// Create a new PaletteKit instance from configuration
    ///
    /// Opens the log file, creates the uploads directory and picks the
    /// mail transport and export file named in `config`.
    pub fn new(config: AppConfig) -> PaletteResult<Self> {
        let logger = Logger::new(&config.log_file)?;
        let uploads = UploadStore::new(&config.uploads_dir)?;
        let notifier = Notifier::from_config(config.mail.clone())?;
        let export_sink = Box::new(FileExportSink::new(config.export_path.clone()));

        Ok(PaletteKit { logger, config, uploads, notifier, export_sink })
    }

    /// Replace the notifier
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the export destination
    pub fn with_export_sink(mut self, sink: Box<dyn ExportSink>) -> Self {
        self.export_sink = sink;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.uploads
    }

    /// Extract the top colors of an image file
    ///
    /// # Arguments
    /// * `path` - Image file with an allow-listed extension
    /// * `n` - Number of colors to return; negative values are rejected
    pub fn extract_from_file(&self, path: &Path, n: i64) -> PaletteResult<Vec<ColorRecord>> {
        let pixels = ImageDecoder::new(&self.logger).decode_file(path)?;
        let colors = extract_top_colors(&pixels, n)?;
        info!("Extracted {} colors from {}", colors.len(), path.display());
        Ok(colors)
    }

    /// Extract the top colors of in-memory image bytes
    pub fn extract_from_bytes(&self, filename: &str, bytes: &[u8], n: i64) -> PaletteResult<Vec<ColorRecord>> {
        let pixels = ImageDecoder::new(&self.logger).decode_bytes(filename, bytes)?;
        extract_top_colors(&pixels, n)
    }

    /// Validate, decode, rank and store an uploaded image
    ///
    /// The file is only written once decoding and extraction succeeded,
    /// so a rejected upload leaves nothing behind.
    ///
    /// # Arguments
    /// * `filename` - Upload file name, `None` when the field was missing
    /// * `bytes` - Uploaded content
    pub fn process_upload(&self, filename: Option<&str>, bytes: &[u8]) -> Result<UploadOutcome, UploadRejection> {
        let filename = filename.ok_or(UploadRejection::MissingFile)?;

        if filename.is_empty() {
            return Err(UploadRejection::EmptyFilename);
        }

        if !is_allowed_file(filename) {
            warn!("Rejected upload with disallowed name {:?}", filename);
            return Err(UploadRejection::NotAllowed);
        }

        let extractor = ColorFrequencyExtractor::new(self.config.top_colors);
        let colors = ImageDecoder::new(&self.logger)
            .decode_bytes(filename, bytes)
            .and_then(|pixels| extractor.extract(&pixels))
            .map_err(|e| {
                error!("Failed to process upload {}: {}", filename, e);
                UploadRejection::Processing(e.to_string())
            })?;

        let (stored_name, _) = self.uploads.save(filename, bytes).map_err(|e| {
            error!("Failed to store upload {}: {}", filename, e);
            UploadRejection::Processing(e.to_string())
        })?;

        self.record(&format!("Processed upload {} with {} colors", stored_name, colors.len()));
        Ok(UploadOutcome { stored_name, colors })
    }

    /// Where exported palettes are delivered
    pub fn export_destination(&self) -> String {
        self.export_sink.describe()
    }

    /// Export a palette through the configured sink
    pub fn export(&self, entries: &[ExportEntry]) -> PaletteResult<()> {
        export_colors(entries, self.export_sink.as_ref())?;
        self.record(&format!("Exported {} colors to {}", entries.len(), self.export_sink.describe()));
        Ok(())
    }

    /// Handle a contact form submission
    ///
    /// Delivery failures are logged and reported through the outcome,
    /// never raised.
    pub fn submit_contact(&self, submission: &ContactSubmission) -> ContactOutcome {
        if let Err(e) = submission.validate() {
            warn!("Rejected contact submission: {}", e);
            return ContactOutcome::Invalid;
        }

        let outcome = if self.notifier.notify(submission) {
            ContactOutcome::Sent
        } else {
            ContactOutcome::Failed
        };

        self.record(&format!("Contact submission from {}: {}", submission.email.trim(), outcome.code()));
        outcome
    }

    /// Write to the log file; a failing log file must not fail the request
    fn record(&self, message: &str) {
        if let Err(e) = self.logger.log(message) {
            warn!("Could not write to log file: {}", e);
        }
    }
}
