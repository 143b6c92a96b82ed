pub mod error;
pub mod transport;

use crate::mailing::error::RowError;
use crate::mailing::error::RowError::{ImplausibleEmailAddress, MissingEmailAddress};
use crate::mailing::transport::Transport;
use crate::recipient::RecipientRow;
use crate::template::MessageTemplate;
use crate::tools::email_address::is_plausible_address;
use log::error;
use std::time::Duration;
use tokio::time::sleep;

/// What happened to one recipient row.
/// Row numbers are 1-based and follow the CSV order,
/// so the operator can fix the reported rows and re-run the failed subset.
#[derive(Debug)]
pub enum RowOutcome {
    Submitted {
        row_number: usize,
        recipient: String,
    },
    Failed {
        row_number: usize,
        recipient: Option<String>,
        reason: RowError,
    },
}

/// Process every recipient row in order, one outcome per row.
/// A failing row is reported and never blocks the rows after it.
/// When a delay is configured, it applies after each row except the last.
pub async fn process_recipients<T: Transport>(
    template: &MessageTemplate,
    rows: &[RecipientRow],
    delay_between_sends: Option<Duration>,
    transport: &mut T,
) -> Vec<RowOutcome> {
    let mut outcomes = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let outcome = match process_recipient(template, row, transport).await {
            Ok(recipient) => RowOutcome::Submitted {
                row_number,
                recipient,
            },
            Err(reason) => {
                error!(
                    "Skipping recipient [row: {row_number}, email: {:?}, error: {reason}]",
                    row.email()
                );
                RowOutcome::Failed {
                    row_number,
                    recipient: row.email().map(str::to_owned),
                    reason,
                }
            }
        };
        outcomes.push(outcome);

        if row_number < rows.len() {
            if let Some(delay) = delay_between_sends {
                sleep(delay).await;
            }
        }
    }

    outcomes
}

async fn process_recipient<T: Transport>(
    template: &MessageTemplate,
    row: &RecipientRow,
    transport: &mut T,
) -> Result<String, RowError> {
    let recipient = row.email().ok_or(MissingEmailAddress)?;
    if !is_plausible_address(recipient) {
        return Err(ImplausibleEmailAddress(recipient.to_owned()));
    }

    let message = template.render(recipient, row)?;
    transport.submit(&message).await?;

    Ok(recipient.to_owned())
}
