//! Upload persistence
//!
//! Uploaded images are kept on disk under a fixed directory, keyed by
//! their sanitized original name.

mod store;

pub use store::UploadStore;
pub use crate::utils::filename_utils::secure_filename;
