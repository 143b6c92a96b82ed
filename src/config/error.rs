use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "Expected 3 positional arguments: the data CSV, the sender and the template path [got: {0}]"
    )]
    WrongPositionalArgumentCount(usize),
    #[error("The sender address doesn't look like an email address [sender: {0}]")]
    InvalidSenderAddress(String),
    #[error("The delay between sends should be a whole number of seconds [value: {0}]")]
    InvalidDelay(String),
}
