#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of an `--arg-name=value` argument passed to the app.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Whether a bare `--arg-name` flag was passed to the app.
pub fn retrieve_flag(arg_name: &str) -> bool {
    get_env_args().iter().any(|arg| arg == arg_name)
}

/// Arguments which don't start with `--`, in the order they were passed.
/// The program name is not included.
pub fn retrieve_positional_args() -> Vec<String> {
    get_env_args()
        .into_iter()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .collect()
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.clone().into_inner())
}

#[cfg(test)]
/// Run `function` with `args` standing in for the process arguments.
/// The first element plays the role of the program name.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
/// Same as [with_env_args], for async functions.
pub fn with_env_args_async<F, T>(args: Vec<String>, function: F) -> T
where
    F: AsyncFnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let rt = tokio::runtime::Runtime::new().unwrap();
        let result = rt.block_on(function());
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use parameterized::{ide, parameterized};

    use crate::tools::env_args::{
        retrieve_arg_value, retrieve_flag, retrieve_positional_args, with_env_args,
    };

    ide!();

    #[parameterized(
        args = {vec!["--login=test_login".to_owned()], vec!["--password=test_password".to_owned()], vec!["--another-arg=wrong".to_owned()], vec![]},
        arg_name = {"--login", "--password", "--password", "--login"},
        expected_result = {Some("test_login".to_owned()), Some("test_password".to_owned()), None, None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_name: &str,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_name));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_keep_equals_signs_within_arg_value() {
        let args = vec!["--subject=1+1=2".to_owned()];

        let result = with_env_args(args, || retrieve_arg_value("--subject"));

        assert_eq!(Some("1+1=2".to_owned()), result);
    }

    #[parameterized(
        args = {vec!["--dry-run".to_owned()], vec!["--dry-run=true".to_owned()], vec![]},
        expected_result = {true, false, false}
    )]
    fn should_retrieve_flag(args: Vec<String>, expected_result: bool) {
        let result = with_env_args(args, || retrieve_flag("--dry-run"));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_retrieve_positional_args_in_order() {
        let args = vec![
            "mail-merge".to_owned(),
            "recipients.csv".to_owned(),
            "--dry-run".to_owned(),
            "Sender <sender@address.com>".to_owned(),
            "--subject=Hello".to_owned(),
            "body.tera".to_owned(),
        ];

        let result = with_env_args(args, retrieve_positional_args);

        assert_eq!(
            vec![
                "recipients.csv".to_owned(),
                "Sender <sender@address.com>".to_owned(),
                "body.tera".to_owned()
            ],
            result
        );
    }
}
