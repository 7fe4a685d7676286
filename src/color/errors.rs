//! Custom error types for palette extraction

use std::fmt;
use std::io;

/// Palette-specific error types
#[derive(Debug)]
pub enum PaletteError {
    /// I/O error
    IoError(io::Error),
    /// A caller-supplied argument is out of range
    InvalidArgument(String),
    /// Pixel buffer shape or channel layout cannot be used
    InvalidImage(String),
    /// File extension is not on the allow-list
    UnsupportedFormat(String),
    /// Image bytes could not be decoded
    Decode(String),
    /// Outbound mail could not be handed to the transport
    Transport(String),
    /// Configuration file could not be parsed
    Config(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::IoError(e) => write!(f, "I/O error: {}", e),
            PaletteError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PaletteError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            PaletteError::UnsupportedFormat(ext) => write!(f, "Unsupported file format: {}", ext),
            PaletteError::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            PaletteError::Transport(msg) => write!(f, "Mail transport error: {}", msg),
            PaletteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PaletteError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PaletteError {
    fn from(error: io::Error) -> Self {
        PaletteError::IoError(error)
    }
}

impl From<String> for PaletteError {
    fn from(msg: String) -> Self {
        PaletteError::GenericError(msg)
    }
}

/// Result type for palette operations
pub type PaletteResult<T> = Result<T, PaletteError>;
