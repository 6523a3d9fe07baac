use std::fmt::Display;

/// [`assert`]s that the result is an error with the given message.
#[track_caller]
pub fn assert_error_message<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    assert!(result.is_err_and(|err| err.to_string() == message))
}

/// [`assert`]s that the result is an error that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T, E>(result: Result<T, E>, message: &str)
where
    E: Display,
{
    assert!(result.is_err_and(|err| err.to_string().contains(message)))
}
