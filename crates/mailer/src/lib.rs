//! Contact-form email relay via SMTP.
//!
//! [`ContactMailer`] wraps the `lettre` async SMTP transport to relay
//! contact-form submissions as plain-text emails. Configuration is loaded
//! from environment variables; if `SMTP_HOST` or `CONTACT_RECIPIENT` is not
//! set, [`MailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for contact email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient, sender, or CC address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// ContactMessage
// ---------------------------------------------------------------------------

/// A decoded contact-form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Assemble the plain-text body relayed for a contact submission.
///
/// The sender's message is prefixed with a fixed header naming the sender,
/// and followed by a contact-info block listing company and country/phone,
/// included only when those fields are present and non-empty.
pub fn contact_body(message: &ContactMessage) -> String {
    let mut contact_info = String::from("\n\nContact info:\n");
    let mut extra_info = false;

    if let Some(company) = non_empty(message.company.as_deref()) {
        contact_info.push_str(&format!("Company: {company}\n"));
        extra_info = true;
    }
    if let Some(phone) = non_empty(message.phone.as_deref()) {
        if let Some(country) = non_empty(message.country.as_deref()) {
            contact_info.push_str(&format!("Country: {country}\n"));
        }
        contact_info.push_str(&format!("Phone: {phone}"));
        extra_info = true;
    }
    if !extra_info {
        contact_info.clear();
    }

    format!(
        "This is a message sent from the portfolio website, this message was sent by: \
         {} {}. Content is shown below:\n{}{}",
        message.first_name, message.last_name, message.message, contact_info
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP contact relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Where relayed contact messages are delivered.
    pub recipient: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `CONTACT_RECIPIENT` is not set,
    /// signalling that the contact relay is not configured.
    ///
    /// | Variable            | Required | Default        |
    /// |---------------------|----------|----------------|
    /// | `SMTP_HOST`         | yes      | —              |
    /// | `CONTACT_RECIPIENT` | yes      | —              |
    /// | `SMTP_PORT`         | no       | `587`          |
    /// | `SMTP_FROM`         | no       | `SMTP_USER`, else `CONTACT_RECIPIENT` |
    /// | `SMTP_USER`         | no       | —              |
    /// | `SMTP_PASSWORD`     | no       | —              |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let recipient = std::env::var("CONTACT_RECIPIENT").ok()?;
        let smtp_user = std::env::var("SMTP_USER").ok();
        let from_address = std::env::var("SMTP_FROM")
            .ok()
            .or_else(|| smtp_user.clone())
            .unwrap_or_else(|| recipient.clone());

        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address,
            recipient,
            smtp_user,
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// ContactMailer
// ---------------------------------------------------------------------------

/// Relays contact-form submissions over SMTP.
pub struct ContactMailer {
    config: MailConfig,
}

impl ContactMailer {
    /// Create a new contact relay with the given configuration.
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Relay one contact submission.
    ///
    /// The subject comes from the submission; the requester is CC'd so a
    /// reply-all reaches them directly.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailerError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.recipient.parse()?)
            .cc(message.email.parse()?)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(contact_body(message))
            .map_err(|e| MailerError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(from = %message.email, subject = %message.subject, "Contact email relayed");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
