//! Rendering of extraction results
//!
//! HTML pages for the web front end and text/JSON reports for the
//! command line.

mod html;
mod report;

pub use html::{HomeView, render_contact, render_home};
pub use report::{ImageReport, render_json_report, render_text_report};
