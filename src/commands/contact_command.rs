//! Contact message command
//!
//! Sends a contact form message from the command line through the
//! configured notifier.

use std::sync::Arc;
use clap::ArgMatches;
use log::info;

use crate::api::{ContactOutcome, PaletteKit};
use crate::color::errors::{PaletteError, PaletteResult};
use crate::commands::command_traits::Command;
use crate::notify::ContactSubmission;

/// Command for sending a contact message
pub struct ContactCommand {
    submission: ContactSubmission,
    kit: Arc<PaletteKit>,
}

impl ContactCommand {
    /// Create a new contact command
    pub fn new(args: &ArgMatches, kit: Arc<PaletteKit>) -> PaletteResult<Self> {
        let field = |name: &str| -> PaletteResult<String> {
            args.get_one::<String>(name)
                .cloned()
                .ok_or_else(|| PaletteError::InvalidArgument(format!("Missing --{}", name)))
        };

        let submission = ContactSubmission::new(
            field("first-name")?,
            field("last-name")?,
            field("email")?,
            field("message")?,
        );

        Ok(ContactCommand { submission, kit })
    }
}

impl Command for ContactCommand {
    fn execute(&self) -> PaletteResult<()> {
        info!("Sending contact message from {}", self.submission.email);

        let outcome = self.kit.submit_contact(&self.submission);
        match outcome {
            ContactOutcome::Sent => {
                println!("{}", outcome.message());
                Ok(())
            },
            ContactOutcome::Invalid => Err(PaletteError::InvalidArgument(outcome.message().to_string())),
            ContactOutcome::Failed => Err(PaletteError::Transport(outcome.message().to_string())),
        }
    }
}
