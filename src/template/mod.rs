pub mod error;
pub mod message;
mod text_wrap;

use crate::recipient::RecipientRow;
use crate::template::error::TemplateError;
use crate::template::error::TemplateError::{
    CantReadTemplateFile, CantRenderMessage, InvalidTemplate,
};
use crate::template::message::Message;
use crate::template::text_wrap::wrap;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

type Result<T, E = TemplateError> = std::result::Result<T, E>;

const SUBJECT_TEMPLATE: &str = "subject";
const BODY_TEMPLATE: &str = "body";

/// The body and subject templates, compiled once at startup
/// and reused read-only for every row.
#[derive(Debug)]
pub struct MessageTemplate {
    tera: Tera,
}

impl MessageTemplate {
    pub fn new(subject: &str, body: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(SUBJECT_TEMPLATE, subject)
            .map_err(InvalidTemplate)?;
        tera.add_raw_template(BODY_TEMPLATE, body)
            .map_err(InvalidTemplate)?;

        Ok(Self { tera })
    }

    /// The body template comes from a file; the subject is template-capable too.
    pub fn from_file(path: &Path, subject: &str) -> Result<Self> {
        let body = fs::read_to_string(path).map_err(CantReadTemplateFile)?;
        Self::new(subject, &body)
    }

    /// Render the subject and body for one recipient.
    /// Referencing a variable the row doesn't have fails the render.
    pub fn render(&self, recipient: &str, row: &RecipientRow) -> Result<Message> {
        let mut context = Context::new();
        for (name, value) in row.values() {
            context.insert(name.as_str(), value);
        }

        let subject = self
            .tera
            .render(SUBJECT_TEMPLATE, &context)
            .map_err(CantRenderMessage)?;
        let body = self
            .tera
            .render(BODY_TEMPLATE, &context)
            .map_err(CantRenderMessage)?;

        Ok(Message::new(recipient.to_owned(), subject, wrap(&body)))
    }
}
