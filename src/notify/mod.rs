//! Contact form mail
//!
//! Submissions are validated, composed into a plain-text mail and handed
//! to a transport. Dispatch is fire-and-forget from the caller's side.

mod submission;
mod transport;
mod notifier;

pub use submission::{ContactSubmission, MailMessage};
pub use transport::{LogTransport, MailTransport, SmtpTransport, SpoolTransport};
pub use notifier::Notifier;
