pub mod error;

use crate::config::error::ConfigError;
use crate::config::error::ConfigError::{
    InvalidDelay, InvalidSenderAddress, WrongPositionalArgumentCount,
};
use crate::tools::email_address::is_plausible_address;
use crate::tools::env_args::{retrieve_arg_value, retrieve_flag, retrieve_positional_args};
use derive_getters::Getters;
use std::path::PathBuf;
use std::time::Duration;

type Result<T, E = ConfigError> = std::result::Result<T, E>;

const SUBJECT_ARG: &str = "--subject";
const REPLY_TO_ARG: &str = "--reply-to";
const DRY_RUN_ARG: &str = "--dry-run";
const DELAY_ARG: &str = "--delay-in-seconds";
const HELP_ARG: &str = "--help";

pub const USAGE: &str = "Send one personalized email per CSV row.

Usage: mail-merge [OPTIONS] <DATA_CSV> <SENDER> <TEMPLATE>

Arguments:
  <DATA_CSV>   CSV file with a header row and a mandatory 'email' column;
               every other column becomes a template variable
  <SENDER>     'From' identity: either 'Display Name <address>' or an address
  <TEMPLATE>   Tera template used as the message body

Options:
  --subject=<TEXT>            Subject line, may contain template placeholders
  --reply-to=<ADDRESS>        'Reply-to' address
  --dry-run                   Print rendered messages instead of sending them
  --delay-in-seconds=<N>      Pause N seconds between two sends
  --smtp-server=<HOST>        SMTP server (default: smtp.gmail.com)
  --smtp-port=<PORT>          SMTP port (default: 587)
  --smtp-login=<LOGIN>        SMTP login (or the SMTP_LOGIN env var)
  --smtp-password=<PASSWORD>  SMTP password (or the SMTP_PASSWORD env var)
  --help                      Print this help";

/// The run configuration, built once from the process arguments
/// and immutable afterwards.
#[derive(Debug, PartialEq, Getters)]
pub struct SendConfig {
    data_csv: PathBuf,
    sender: Sender,
    template_path: PathBuf,
    subject: String,
    reply_to: Option<String>,
    dry_run: bool,
    delay_between_sends: Option<Duration>,
}

pub fn build_send_config() -> Result<SendConfig> {
    let positional_args = retrieve_positional_args();
    if positional_args.len() != 3 {
        return Err(WrongPositionalArgumentCount(positional_args.len()));
    }

    Ok(SendConfig {
        data_csv: PathBuf::from(&positional_args[0]),
        sender: Sender::parse(&positional_args[1])?,
        template_path: PathBuf::from(&positional_args[2]),
        subject: retrieve_arg_value(SUBJECT_ARG).unwrap_or_default(),
        reply_to: retrieve_arg_value(REPLY_TO_ARG),
        dry_run: retrieve_flag(DRY_RUN_ARG),
        delay_between_sends: retrieve_delay()?,
    })
}

pub fn is_help_requested() -> bool {
    retrieve_flag(HELP_ARG)
}

fn retrieve_delay() -> Result<Option<Duration>> {
    match retrieve_arg_value(DELAY_ARG) {
        None => Ok(None),
        Some(value) => {
            let seconds = value.parse::<u64>().map_err(|_| InvalidDelay(value))?;
            Ok((seconds > 0).then(|| Duration::from_secs(seconds)))
        }
    }
}

// region Sender
/// The 'From' identity: either `Display Name <address>` or a bare address.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Sender {
    name: Option<String>,
    address: String,
}

impl Sender {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (name, address) = match raw.split_once('<') {
            Some((name, rest)) if rest.ends_with('>') => {
                let name = name.trim();
                let name = (!name.is_empty()).then(|| name.to_owned());
                (name, rest.trim_end_matches('>').trim().to_owned())
            }
            _ => (None, raw.to_owned()),
        };

        if !is_plausible_address(&address) {
            return Err(InvalidSenderAddress(raw.to_owned()));
        }

        Ok(Self { name, address })
    }
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use parameterized::{ide, parameterized};

    ide!();

    const PROGRAM_NAME: &str = "mail-merge";
    const TEST_DATA_CSV: &str = "recipients.csv";
    const TEST_SENDER: &str = "Sender <sender@address.com>";
    const TEST_TEMPLATE: &str = "body.tera";

    fn positional_args() -> Vec<String> {
        vec![
            PROGRAM_NAME.to_owned(),
            TEST_DATA_CSV.to_owned(),
            TEST_SENDER.to_owned(),
            TEST_TEMPLATE.to_owned(),
        ]
    }

    // region build_send_config
    #[test]
    fn should_build_send_config() {
        let mut args = positional_args();
        args.extend([
            format!("{SUBJECT_ARG}=Hello {{{{ name }}}}!"),
            format!("{REPLY_TO_ARG}=reply@address.com"),
            DRY_RUN_ARG.to_owned(),
            format!("{DELAY_ARG}=2"),
        ]);

        let config = with_env_args(args, build_send_config).unwrap();

        assert_eq!(&PathBuf::from(TEST_DATA_CSV), config.data_csv());
        assert_eq!(&Sender::parse(TEST_SENDER).unwrap(), config.sender());
        assert_eq!(&PathBuf::from(TEST_TEMPLATE), config.template_path());
        assert_eq!("Hello {{ name }}!", config.subject());
        assert_eq!(&Some("reply@address.com".to_owned()), config.reply_to());
        assert!(*config.dry_run());
        assert_eq!(&Some(Duration::from_secs(2)), config.delay_between_sends());
    }

    #[test]
    fn should_build_send_config_with_defaults() {
        let config = with_env_args(positional_args(), build_send_config).unwrap();

        assert_eq!("", config.subject());
        assert_eq!(&None, config.reply_to());
        assert!(!*config.dry_run());
        assert_eq!(&None, config.delay_between_sends());
    }

    #[parameterized(
        positional_count = {0, 2, 4}
    )]
    fn should_fail_to_build_send_config_with_wrong_positional_count(positional_count: usize) {
        let mut args = vec![PROGRAM_NAME.to_owned()];
        args.extend((0..positional_count).map(|i| format!("arg-{i}")));

        let error = with_env_args(args, build_send_config).unwrap_err();

        assert_eq!(WrongPositionalArgumentCount(positional_count), error);
    }

    #[test]
    fn should_fail_to_build_send_config_with_implausible_sender() {
        let args = vec![
            PROGRAM_NAME.to_owned(),
            TEST_DATA_CSV.to_owned(),
            "not-an-address".to_owned(),
            TEST_TEMPLATE.to_owned(),
        ];

        let error = with_env_args(args, build_send_config).unwrap_err();

        assert_eq!(InvalidSenderAddress("not-an-address".to_owned()), error);
    }

    #[parameterized(
        delay = {"two", "-1", "1.5"}
    )]
    fn should_fail_to_build_send_config_with_invalid_delay(delay: &str) {
        let mut args = positional_args();
        args.push(format!("{DELAY_ARG}={delay}"));

        let error = with_env_args(args, build_send_config).unwrap_err();

        assert_eq!(InvalidDelay(delay.to_owned()), error);
    }

    #[test]
    fn should_ignore_zero_delay() {
        let mut args = positional_args();
        args.push(format!("{DELAY_ARG}=0"));

        let config = with_env_args(args, build_send_config).unwrap();

        assert_eq!(&None, config.delay_between_sends());
    }
    // endregion

    // region is_help_requested
    #[parameterized(
        args = {vec!["mail-merge".to_owned(), "--help".to_owned()], vec!["mail-merge".to_owned()]},
        expected_result = {true, false}
    )]
    fn should_detect_help_request(args: Vec<String>, expected_result: bool) {
        let result = with_env_args(args, is_help_requested);
        assert_eq!(expected_result, result);
    }
    // endregion

    // region Sender::parse
    #[parameterized(
        raw = {"Ada Lovelace <ada@example.com>", "ada@example.com", "<ada@example.com>", "  Ada Lovelace   < ada@example.com >  "},
        expected_name = {Some("Ada Lovelace"), None, None, Some("Ada Lovelace")}
    )]
    fn should_parse_sender(raw: &str, expected_name: Option<&str>) {
        let sender = Sender::parse(raw).unwrap();

        assert_eq!(&expected_name.map(str::to_owned), sender.name());
        assert_eq!("ada@example.com", sender.address());
    }

    #[parameterized(
        raw = {"Ada Lovelace", "Ada Lovelace <not-an-address>", "Ada <Lovelace"}
    )]
    fn should_fail_to_parse_implausible_sender(raw: &str) {
        let error = Sender::parse(raw).unwrap_err();

        assert_eq!(InvalidSenderAddress(raw.to_owned()), error);
    }
    // endregion
}
