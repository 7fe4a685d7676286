//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod contact_command;
pub mod serve_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::{ExtractCommand, ReportFormat};
pub use contact_command::ContactCommand;
pub use serve_command::ServeCommand;

use std::sync::Arc;
use clap::ArgMatches;

use crate::api::PaletteKit;
use crate::color::errors::PaletteResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct PalettekitCommandFactory;

impl PalettekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PalettekitCommandFactory
    }
}

impl Default for PalettekitCommandFactory {
    fn default() -> Self {
        PalettekitCommandFactory::new()
    }
}

impl CommandFactory for PalettekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: Arc<PaletteKit>) -> PaletteResult<Box<dyn Command>> {
        if args.get_flag("serve") {
            Ok(Box::new(ServeCommand::new(args, kit)?))
        } else if args.get_flag("contact") {
            Ok(Box::new(ContactCommand::new(args, kit)?))
        } else {
            // Default to extracting colors from the inputs
            Ok(Box::new(ExtractCommand::new(args, kit)?))
        }
    }
}
