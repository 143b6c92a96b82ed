use regex::Regex;
use std::sync::LazyLock;

static PLAUSIBLE_ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Cheap plausibility check for an email address.
/// Full RFC validation is left to the mail server.
pub fn is_plausible_address(address: &str) -> bool {
    PLAUSIBLE_ADDRESS_PATTERN.is_match(address)
}
