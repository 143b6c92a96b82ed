use crate::template::error::TemplateError;
use thiserror::Error;

/// Errors which abort the whole run before any further send.
#[derive(Debug, PartialEq, Error)]
pub enum MailingError {
    #[error("Missing SMTP login")]
    MissingSmtpLogin,
    #[error("Missing SMTP password")]
    MissingSmtpPassword,
    #[error("Can't connect to SMTP server")]
    CantConnectToSmtpServer,
}

/// Errors confined to a single recipient row.
/// The loop reports them and moves on to the next row.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("The row has no email address")]
    MissingEmailAddress,
    #[error("The recipient address doesn't look like an email address [address: {0}]")]
    ImplausibleEmailAddress(String),
    #[error(transparent)]
    CantRenderMessage(#[from] TemplateError),
    #[error("The mail server rejected the message [recipient: {0}]")]
    Rejected(String),
}
