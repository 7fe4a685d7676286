//! Outbound mail transports

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport as SmtpClient, Transport};
use log::info;

use crate::color::errors::{PaletteError, PaletteResult};
use crate::config::MailConfig;

use super::submission::MailMessage;

/// Something that can accept an outgoing mail for delivery
pub trait MailTransport: Send + Sync {
    /// Hand the message over; success means accepted, not delivered
    fn send(&self, message: &MailMessage) -> PaletteResult<()>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

/// Writes each message as a file into a spool directory picked up by a local MTA
#[derive(Debug)]
pub struct SpoolTransport {
    outbox_dir: PathBuf,
    sequence: AtomicU64,
}

impl SpoolTransport {
    /// Create a transport spooling into `outbox_dir`
    pub fn new(outbox_dir: impl Into<PathBuf>) -> Self {
        SpoolTransport {
            outbox_dir: outbox_dir.into(),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_file_name(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}.eml", nanos, std::process::id(), seq)
    }
}

impl MailTransport for SpoolTransport {
    fn send(&self, message: &MailMessage) -> PaletteResult<()> {
        fs::create_dir_all(&self.outbox_dir).map_err(|e| PaletteError::Transport(
            format!("Cannot create outbox {}: {}", self.outbox_dir.display(), e)
        ))?;

        let path = self.outbox_dir.join(self.next_file_name());
        fs::write(&path, message.to_rfc822()).map_err(|e| PaletteError::Transport(
            format!("Cannot write {}: {}", path.display(), e)
        ))?;

        info!("Spooled mail to {} as {}", message.to, path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "spool"
    }
}

/// Only records messages in the log
#[derive(Debug, Default)]
pub struct LogTransport;

impl MailTransport for LogTransport {
    fn send(&self, message: &MailMessage) -> PaletteResult<()> {
        info!("Mail to {} ({}):\n{}", message.to, message.subject, message.body);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Delivers messages to an SMTP relay over STARTTLS
pub struct SmtpTransport {
    host: String,
    client: SmtpClient,
}

impl SmtpTransport {
    /// Create a transport for `host`:`port`, logging in when credentials are given
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(host: &str, port: u16, credentials: Option<(String, String)>) -> PaletteResult<Self> {
        let mut builder = SmtpClient::starttls_relay(host)
            .map_err(|e| PaletteError::Transport(format!("Invalid SMTP relay {}: {}", host, e)))?
            .port(port);

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(SmtpTransport {
            host: format!("{}:{}", host, port),
            client: builder.build(),
        })
    }

    /// Create a transport from the `[mail]` settings
    ///
    /// # Returns
    /// None when no SMTP host is configured
    pub fn from_config(config: &MailConfig) -> PaletteResult<Option<Self>> {
        let Some(host) = config.smtp_host.as_deref() else {
            return Ok(None);
        };

        let credentials = config.username.clone().zip(config.password.clone());
        SmtpTransport::new(host, config.smtp_port, credentials).map(Some)
    }

    /// Relay address as `host:port`
    pub fn relay(&self) -> &str {
        &self.host
    }
}

fn mailbox(field: &str, address: &str) -> PaletteResult<Mailbox> {
    address.parse().map_err(|e| PaletteError::Transport(
        format!("Invalid {} address {:?}: {}", field, address, e)
    ))
}

impl MailTransport for SmtpTransport {
    fn send(&self, message: &MailMessage) -> PaletteResult<()> {
        let email = Message::builder()
            .from(mailbox("sender", &message.from)?)
            .to(mailbox("recipient", &message.to)?)
            .reply_to(mailbox("reply-to", &message.reply_to)?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| PaletteError::Transport(format!("Cannot build mail: {}", e)))?;

        self.client.send(&email)
            .map_err(|e| PaletteError::Transport(format!("SMTP delivery via {} failed: {}", self.host, e)))?;

        info!("Sent mail to {} via {}", message.to, self.host);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
