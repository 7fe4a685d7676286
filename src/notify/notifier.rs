//! Contact form notifier

use log::{error, info};

use crate::color::errors::PaletteResult;
use crate::config::MailConfig;

use super::submission::ContactSubmission;
use super::transport::{LogTransport, MailTransport, SmtpTransport, SpoolTransport};

/// Formats contact submissions and dispatches them as mail
pub struct Notifier {
    config: MailConfig,
    transport: Box<dyn MailTransport>,
}

impl Notifier {
    /// Create a notifier with an explicit transport
    pub fn new(config: MailConfig, transport: Box<dyn MailTransport>) -> Self {
        Notifier { config, transport }
    }

    /// Create a notifier whose transport follows the configuration
    ///
    /// Uses SMTP when `smtp_host` is set, spools into `outbox_dir` when
    /// that is set, and otherwise only logs.
    pub fn from_config(config: MailConfig) -> PaletteResult<Self> {
        let transport: Box<dyn MailTransport> = match SmtpTransport::from_config(&config)? {
            Some(smtp) => {
                info!("Contact mail goes to SMTP relay {}", smtp.relay());
                Box::new(smtp)
            },
            None => match &config.outbox_dir {
                Some(dir) => Box::new(SpoolTransport::new(dir.clone())),
                None => Box::new(LogTransport),
            },
        };
        Ok(Notifier::new(config, transport))
    }

    /// Name of the transport in use
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Validate, compose and send a submission
    pub fn send(&self, submission: &ContactSubmission) -> PaletteResult<()> {
        submission.validate()?;
        let message = submission.compose(&self.config);
        self.transport.send(&message)?;
        info!("The message was sent via {} transport", self.transport.name());
        Ok(())
    }

    /// Send a submission without propagating failures
    ///
    /// # Returns
    /// Whether the transport accepted the message; failures are logged
    pub fn notify(&self, submission: &ContactSubmission) -> bool {
        match self.send(submission) {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to send contact message: {}", e);
                false
            }
        }
    }
}
