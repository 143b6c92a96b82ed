pub mod error;

use crate::recipient::error::RecipientError;
use crate::recipient::error::RecipientError::{CantOpenDataFile, EmptyDataFile, MalformedRecord};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

type Result<T, E = RecipientError> = std::result::Result<T, E>;

/// Name of the one mandatory CSV column.
pub const EMAIL_COLUMN: &str = "email";

/// One CSV record mapped to column → value pairs for one recipient.
/// Every column other than `email` is a free-form template variable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RecipientRow {
    values: HashMap<String, String>,
}

impl RecipientRow {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// The destination address, if the row carries a non-blank `email` value.
    pub fn email(&self) -> Option<&str> {
        self.values
            .get(EMAIL_COLUMN)
            .map(|email| email.trim())
            .filter(|email| !email.is_empty())
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}

/// Load all recipient rows from a CSV file, in file order.
/// A file which can't be read or parsed as a whole is a fatal error;
/// rows lacking an `email` value are loaded anyway
/// and reported one by one when processed.
pub fn load_recipients(path: &Path) -> Result<Vec<RecipientRow>> {
    let mut reader = csv::Reader::from_path(path).map_err(CantOpenDataFile)?;
    load_recipients_from_reader(&mut reader)
}

fn load_recipients_from_reader<T: Read>(reader: &mut csv::Reader<T>) -> Result<Vec<RecipientRow>> {
    if reader.headers().map_err(MalformedRecord)?.is_empty() {
        return Err(EmptyDataFile);
    }

    let mut rows = vec![];
    for record in reader.deserialize() {
        rows.push(record.map_err(MalformedRecord)?);
    }

    Ok(rows)
}
