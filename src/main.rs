mod config;
mod error;
mod mailing;
mod recipient;
mod template;
mod tools;

use crate::config::{USAGE, build_send_config, is_help_requested};
use crate::error::Result;
use crate::mailing::transport::{PreviewTransport, connect_smtp};
use crate::mailing::{RowOutcome, process_recipients};
use crate::recipient::load_recipients;
use crate::template::MessageTemplate;
use env_logger::Env;
use log::{error, info, warn};

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if is_help_requested() {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run().await {
        error!("Aborting [error: {e:#?}]");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = build_send_config()?;
    let template = MessageTemplate::from_file(config.template_path(), config.subject())?;
    let rows = load_recipients(config.data_csv())?;

    let outcomes = if *config.dry_run() {
        let mut transport = PreviewTransport::default();
        process_recipients(&template, &rows, None, &mut transport).await
    } else {
        let mut transport = connect_smtp(config.sender().clone(), config.reply_to().clone()).await?;
        process_recipients(&template, &rows, *config.delay_between_sends(), &mut transport).await
    };

    report_outcomes(&outcomes, *config.dry_run());
    Ok(())
}

/// Row-level failures don't fail the run: the operator fixes the reported
/// rows and re-runs with a filtered CSV.
fn report_outcomes(outcomes: &[RowOutcome], dry_run: bool) {
    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, RowOutcome::Failed { .. }))
        .count();
    let submitted = outcomes.len() - failed;
    let action = if dry_run { "previewed" } else { "sent" };

    if failed > 0 {
        warn!("{submitted} message(s) {action}, {failed} recipient(s) skipped");
    } else {
        info!("{submitted} message(s) {action}");
    }
}
