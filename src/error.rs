use crate::config::error::ConfigError;
use crate::mailing::error::MailingError;
use crate::recipient::error::RecipientError;
use crate::template::error::TemplateError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The command line can't be understood.")]
    Config(#[from] ConfigError),
    #[error("The recipients can't be loaded.")]
    Recipient(#[from] RecipientError),
    #[error("The message template can't be used.")]
    Template(#[from] TemplateError),
    #[error("The mail server can't be used.")]
    Mailing(#[from] MailingError),
}
