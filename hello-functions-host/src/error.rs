//! Common host interfaces types

use hello_functions_wit::function_web::hello::functions::types::InvocationError;

/// An alias for Result<T, Error> for convenience.
pub type FunctionResult<T> = std::result::Result<T, Error>;

/// An error during the execution of a Function.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A catch-all error with a message.
    #[error("{0}")]
    MessageError(String),
}

impl From<Error> for InvocationError {
    fn from(e: Error) -> Self {
        match e {
            Error::MessageError(msg) => InvocationError::RequestError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_error_displays_message() {
        let error = Error::MessageError("bad payload".to_string());
        assert_eq!(error.to_string(), "bad payload");
    }

    #[test]
    fn message_error_becomes_request_error() {
        let error: InvocationError = Error::MessageError("bad payload".to_string()).into();
        assert!(matches!(error, InvocationError::RequestError(msg) if msg == "bad payload"));
    }
}
