use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipientError {
    #[error("Can't open the data file.")]
    CantOpenDataFile(csv::Error),
    #[error("The data file is empty.")]
    EmptyDataFile,
    #[error("The data file contains a malformed record [error: {0}]")]
    MalformedRecord(csv::Error),
}
