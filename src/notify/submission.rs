//! Contact form submissions and the mail they turn into

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color::errors::{PaletteError, PaletteResult};
use crate::config::MailConfig;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern");
}

/// A message left through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// A composed outgoing mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl ContactSubmission {
    /// Create a submission from its four fields
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>,
               email: impl Into<String>, message: impl Into<String>) -> Self {
        ContactSubmission {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check that every field is filled in and the email looks like an address
    pub fn validate(&self) -> PaletteResult<()> {
        let fields = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("message", &self.message),
        ];

        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(PaletteError::InvalidArgument(format!("Missing {}", label)));
            }
        }

        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(PaletteError::InvalidArgument(format!("Invalid email address: {}", self.email)));
        }

        Ok(())
    }

    /// Build the mail delivered to the site owner
    pub fn compose(&self, config: &MailConfig) -> MailMessage {
        let body = format!(
            "You got a message:\nFrom {} {}, Email:{}\nFor details:\n{}",
            self.first_name.trim(), self.last_name.trim(), self.email.trim(), self.message
        );

        MailMessage {
            from: config.sender.clone(),
            to: config.recipient.clone(),
            reply_to: self.email.trim().to_string(),
            subject: config.subject.clone(),
            body,
        }
    }
}

impl MailMessage {
    /// Render the message with RFC 822 style headers
    pub fn to_rfc822(&self) -> String {
        // Header values must not carry line breaks
        let clean = |value: &str| value.replace(['\r', '\n'], " ");

        format!(
            "From: {}\r\nTo: {}\r\nReply-To: {}\r\nSubject: {}\r\nContent-Type: text/plain; charset=utf-8\r\n\r\n{}\r\n",
            clean(&self.from),
            clean(&self.to),
            clean(&self.reply_to),
            clean(&self.subject),
            self.body.replace("\r\n", "\n").replace('\n', "\r\n"),
        )
    }
}
