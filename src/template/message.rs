use derive_getters::Getters;

/// The rendered (recipient, subject, body) triple for one recipient row.
/// Created transiently per row, then printed or handed to the transport.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Message {
    recipient: String,
    subject: String,
    body: String,
}

impl Message {
    pub fn new(recipient: String, subject: String, body: String) -> Self {
        Self {
            recipient,
            subject,
            body,
        }
    }
}
