//! HTTP front end
//!
//! Routes:
//! - `GET /` upload form
//! - `POST /upload` multipart upload (field `image`), renders the palette
//! - `GET /uploads/:name` stored upload
//! - `POST /copy_colors` JSON export of a palette
//! - `GET /contact`, `POST /contact` contact form

mod server;

pub use server::{router, serve};
