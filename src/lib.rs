pub mod color;
pub mod decoder;
pub mod upload;
pub mod export;
pub mod notify;
pub mod view;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;
#[cfg(feature = "web")]
pub mod web;

pub use crate::api::{PaletteKit, UploadOutcome, UploadRejection, ContactOutcome};

pub use color::{extract_top_colors, ColorFrequencyExtractor, ColorRecord, RgbColor, PaletteError, PaletteResult};
pub use config::{AppConfig, MailConfig};
pub use decoder::{ImageDecoder, PixelBuffer, is_allowed_file};
