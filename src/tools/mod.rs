pub mod email_address;
pub mod env_args;

use log::error;
use std::fmt::Debug;

pub fn log_message_and_return<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
