//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod filename_utils;
pub(crate) mod html_utils;
pub(crate) mod date_utils;
