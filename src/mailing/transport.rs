use crate::config::Sender;
use crate::mailing::error::MailingError::{
    CantConnectToSmtpServer, MissingSmtpLogin, MissingSmtpPassword,
};
use crate::mailing::error::{MailingError, RowError};
use crate::template::message::Message;
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_message_and_return;
use log::info;
use mail_send::mail_builder::MessageBuilder;
use mail_send::{SmtpClient, SmtpClientBuilder};
use std::env;
use tokio::io::{AsyncRead, AsyncWrite};

type Result<T, E = MailingError> = std::result::Result<T, E>;

const SMTP_SERVER_ARG: &str = "--smtp-server";
const SMTP_PORT_ARG: &str = "--smtp-port";
const SMTP_LOGIN_ARG: &str = "--smtp-login";
const SMTP_PASSWORD_ARG: &str = "--smtp-password";
const SMTP_LOGIN_ENV_VAR: &str = "SMTP_LOGIN";
const SMTP_PASSWORD_ENV_VAR: &str = "SMTP_PASSWORD";
const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;

/// Where rendered messages end up: the SMTP session, or stdout in dry-run mode.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn submit(&mut self, message: &Message) -> Result<(), RowError>;
}

// region SMTP
pub struct SmtpTransport<T: AsyncRead + AsyncWrite> {
    client: SmtpClient<T>,
    sender: Sender,
    reply_to: Option<String>,
}

/// Open and authenticate the SMTP session used for the whole run.
/// A failure here is fatal: it happens before any message is submitted.
pub async fn connect_smtp(
    sender: Sender,
    reply_to: Option<String>,
) -> Result<SmtpTransport<impl AsyncRead + AsyncWrite + Unpin>> {
    let client = SmtpClientBuilder::new(retrieve_smtp_server(), retrieve_smtp_port())
        .implicit_tls(false)
        .credentials((retrieve_smtp_login()?, retrieve_smtp_password()?))
        .connect()
        .await
        .map_err(log_message_and_return(
            "Couldn't connect to SMTP server",
            CantConnectToSmtpServer,
        ))?;

    Ok(SmtpTransport {
        client,
        sender,
        reply_to,
    })
}

impl<T: AsyncRead + AsyncWrite + Unpin> Transport for SmtpTransport<T> {
    async fn submit(&mut self, message: &Message) -> Result<(), RowError> {
        let builder = create_message(&self.sender, self.reply_to.as_deref(), message);
        self.client
            .send(builder)
            .await
            .map_err(log_message_and_return(
                "Couldn't send message",
                RowError::Rejected(message.recipient().clone()),
            ))?;
        info!("Mail sent [recipient: {}]", message.recipient());

        Ok(())
    }
}

fn create_message<'a>(
    sender: &'a Sender,
    reply_to: Option<&'a str>,
    message: &'a Message,
) -> MessageBuilder<'a> {
    let builder = MessageBuilder::new()
        .to(message.recipient().as_str())
        .subject(message.subject().as_str())
        .text_body(message.body().as_str());
    let builder = match sender.name() {
        Some(name) => builder.from((name.as_str(), sender.address().as_str())),
        None => builder.from(sender.address().as_str()),
    };

    match reply_to {
        Some(reply_to) => builder.reply_to(reply_to),
        None => builder,
    }
}

// region Retrieve args
fn retrieve_smtp_server() -> String {
    retrieve_arg_value(SMTP_SERVER_ARG).unwrap_or(DEFAULT_SMTP_SERVER.to_owned())
}

fn retrieve_smtp_port() -> u16 {
    retrieve_arg_value(SMTP_PORT_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_SMTP_PORT)
}

fn retrieve_smtp_login() -> Result<String> {
    retrieve_arg_value(SMTP_LOGIN_ARG)
        .or_else(|| env::var(SMTP_LOGIN_ENV_VAR).ok())
        .ok_or(MissingSmtpLogin)
}

fn retrieve_smtp_password() -> Result<String> {
    retrieve_arg_value(SMTP_PASSWORD_ARG)
        .or_else(|| env::var(SMTP_PASSWORD_ENV_VAR).ok())
        .ok_or(MissingSmtpPassword)
}
// endregion
// endregion

// region Preview
/// Dry-run transport: prints rendered messages to stdout
/// and never contacts any server.
#[derive(Debug, Default)]
pub struct PreviewTransport {
    previewed: usize,
}

impl PreviewTransport {
    pub fn previewed(&self) -> usize {
        self.previewed
    }
}

impl Transport for PreviewTransport {
    async fn submit(&mut self, message: &Message) -> Result<(), RowError> {
        println!("To: {}", message.recipient());
        println!("Subject: {}", message.subject());
        println!();
        println!("{}", message.body());
        println!("----------------------------------------");
        self.previewed += 1;

        Ok(())
    }
}
// endregion
