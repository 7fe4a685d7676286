//! Palette export
//!
//! Turns ranked colors into copyable text and delivers it to a file or
//! the terminal.

mod sink;

pub use sink::{
    ExportEntry, ExportSink, FileExportSink, StdoutExportSink,
    export_colors, format_export_text,
};
