//! Application configuration
//!
//! Settings are read from a TOML file and passed explicitly to the
//! components that need them. Every key is optional:
//!
//! ```toml
//! [logging]
//! file = "palettekit.log"
//! global_file = "palettekit-global.log"
//!
//! [server]
//! bind = "127.0.0.1:5000"
//! uploads_dir = "static/uploads"
//! top_colors = 10
//!
//! [export]
//! path = "exports/palette.txt"
//!
//! [mail]
//! sender = "palettekit@localhost"
//! recipient = "owner@localhost"
//! subject = "New message from the palette contact form"
//! outbox_dir = "outbox"
//! smtp_host = "smtp.example.com"
//! smtp_port = 587
//! username = "owner@example.com"
//! password = "app-password"
//! ```
//!
//! Mail goes over SMTP with STARTTLS when `smtp_host` is set, is spooled
//! into `outbox_dir` otherwise, and is only logged when neither is set.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::color::errors::{PaletteError, PaletteResult};
use crate::color::frequency::DEFAULT_TOP_COLORS;

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "palettekit.toml";

/// SMTP submission port used with STARTTLS
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Outbound mail settings for the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Address messages are sent from
    pub sender: String,
    /// Address contact messages are delivered to
    pub recipient: String,
    /// Subject line of contact messages
    pub subject: String,
    /// Spool directory for outgoing messages when no SMTP host is set
    pub outbox_dir: Option<PathBuf>,
    /// SMTP relay host
    pub smtp_host: Option<String>,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP login name
    pub username: Option<String>,
    /// SMTP login password
    pub password: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        MailConfig {
            sender: "palettekit@localhost".to_string(),
            recipient: "palettekit@localhost".to_string(),
            subject: "New message from the palette contact form".to_string(),
            outbox_dir: None,
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Operations log written by the library facade
    pub log_file: String,
    /// File receiving every `log` record of the process
    pub global_log_file: String,
    /// Address the web server listens on
    pub bind_addr: String,
    /// Directory uploaded images are stored in
    pub uploads_dir: PathBuf,
    /// Number of colors reported per upload
    pub top_colors: usize,
    /// File the export endpoint writes palettes to
    pub export_path: PathBuf,
    /// Contact form mail settings
    pub mail: MailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_file: "palettekit.log".to_string(),
            global_log_file: "palettekit-global.log".to_string(),
            bind_addr: "127.0.0.1:5000".to_string(),
            uploads_dir: PathBuf::from("static/uploads"),
            top_colors: DEFAULT_TOP_COLORS,
            export_path: PathBuf::from("exports/palette.txt"),
            mail: MailConfig::default(),
        }
    }
}

impl FromStr for AppConfig {
    type Err = PaletteError;

    /// Parse configuration from a TOML string, filling gaps with defaults
    fn from_str(content: &str) -> PaletteResult<Self> {
        let table: toml::Table = content.parse()
            .map_err(|e| PaletteError::Config(format!("Failed to parse TOML: {}", e)))?;
        let toml_value = toml::Value::Table(table);

        let mut config = AppConfig::default();

        if let Some(file) = get_str(&toml_value, "logging", "file")? {
            config.log_file = file;
        }
        if let Some(file) = get_str(&toml_value, "logging", "global_file")? {
            config.global_log_file = file;
        }

        if let Some(bind) = get_str(&toml_value, "server", "bind")? {
            config.bind_addr = bind;
        }
        if let Some(dir) = get_str(&toml_value, "server", "uploads_dir")? {
            config.uploads_dir = PathBuf::from(dir);
        }
        if let Some(value) = toml_value.get("server").and_then(|t| t.get("top_colors")) {
            let count = value.as_integer()
                .ok_or_else(|| PaletteError::Config("server.top_colors must be an integer".to_string()))?;
            config.top_colors = usize::try_from(count)
                .map_err(|_| PaletteError::Config(format!("server.top_colors must not be negative, got {}", count)))?;
        }

        if let Some(path) = get_str(&toml_value, "export", "path")? {
            config.export_path = PathBuf::from(path);
        }

        if let Some(sender) = get_str(&toml_value, "mail", "sender")? {
            config.mail.sender = sender;
        }
        if let Some(recipient) = get_str(&toml_value, "mail", "recipient")? {
            config.mail.recipient = recipient;
        }
        if let Some(subject) = get_str(&toml_value, "mail", "subject")? {
            config.mail.subject = subject;
        }
        if let Some(dir) = get_str(&toml_value, "mail", "outbox_dir")? {
            config.mail.outbox_dir = Some(PathBuf::from(dir));
        }
        config.mail.smtp_host = get_str(&toml_value, "mail", "smtp_host")?;
        if let Some(value) = toml_value.get("mail").and_then(|t| t.get("smtp_port")) {
            let port = value.as_integer()
                .ok_or_else(|| PaletteError::Config("mail.smtp_port must be an integer".to_string()))?;
            config.mail.smtp_port = u16::try_from(port)
                .map_err(|_| PaletteError::Config(format!("mail.smtp_port out of range: {}", port)))?;
        }
        config.mail.username = get_str(&toml_value, "mail", "username")?;
        config.mail.password = get_str(&toml_value, "mail", "password")?;

        if config.mail.username.is_some() != config.mail.password.is_some() {
            return Err(PaletteError::Config(
                "mail.username and mail.password must be set together".to_string()
            ));
        }

        Ok(config)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> PaletteResult<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// Load the given file, or the default file if it exists, or built-in defaults
    pub fn load(path: Option<&Path>) -> PaletteResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE)),
            None => Ok(AppConfig::default()),
        }
    }
}

/// Read an optional string key from a table
fn get_str(root: &toml::Value, table: &str, key: &str) -> PaletteResult<Option<String>> {
    match root.get(table).and_then(|t| t.get(key)) {
        None => Ok(None),
        Some(value) => value.as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| PaletteError::Config(format!("{}.{} must be a string", table, key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = "".parse::<AppConfig>().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.top_colors, 10);
    }

    #[test]
    fn test_values_override_defaults() {
        let config: AppConfig = r#"
            [server]
            bind = "0.0.0.0:8080"
            top_colors = 5

            [mail]
            recipient = "me@example.com"
            outbox_dir = "/tmp/outbox"
        "#.parse().unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.top_colors, 5);
        assert_eq!(config.mail.recipient, "me@example.com");
        assert_eq!(config.mail.outbox_dir, Some(PathBuf::from("/tmp/outbox")));
        assert_eq!(config.uploads_dir, PathBuf::from("static/uploads"));
    }

    fn parse_config(content: &str) -> PaletteResult<AppConfig> {
        content.parse()
    }

    #[test]
    fn test_smtp_settings() {
        let config = parse_config(r#"
            [mail]
            smtp_host = "smtp.example.com"
            smtp_port = 2525
            username = "owner@example.com"
            password = "secret"
        "#).unwrap();

        assert_eq!(config.mail.smtp_host.as_deref(), Some("smtp.example.com"));
        assert_eq!(config.mail.smtp_port, 2525);
        assert_eq!(config.mail.username.as_deref(), Some("owner@example.com"));
        assert_eq!(config.mail.password.as_deref(), Some("secret"));
        assert_eq!(AppConfig::default().mail.smtp_port, DEFAULT_SMTP_PORT);

        assert!(matches!(parse_config("[mail]\nsmtp_port = 70000"), Err(PaletteError::Config(_))));
        assert!(matches!(parse_config("[mail]\nusername = \"me\""), Err(PaletteError::Config(_))));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(matches!(parse_config("[server]\ntop_colors = \"ten\""), Err(PaletteError::Config(_))));
        assert!(matches!(parse_config("[server]\ntop_colors = -3"), Err(PaletteError::Config(_))));
        assert!(matches!(parse_config("[mail]\nsender = 4"), Err(PaletteError::Config(_))));
        assert!(matches!(parse_config("not toml ="), Err(PaletteError::Config(_))));
    }
}
