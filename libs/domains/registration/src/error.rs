use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the backend fails without telling us why
pub const FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Please complete all fields")]
    IncompleteFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Registration rejected with status {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Local input problems: nothing was sent to the backend
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistrationError::IncompleteFields | RegistrationError::PasswordMismatch
        )
    }

    /// Text presented to the person filling in the form.
    ///
    /// Server-supplied messages are passed through verbatim; failures that
    /// carry no usable message collapse to [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            RegistrationError::IncompleteFields
            | RegistrationError::PasswordMismatch
            | RegistrationError::Timeout => self.to_string(),
            RegistrationError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            RegistrationError::Rejected { .. }
            | RegistrationError::MalformedResponse(_)
            | RegistrationError::Transport(_)
            | RegistrationError::InvalidEndpoint(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for RegistrationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RegistrationError::Timeout
        } else if err.is_decode() {
            RegistrationError::MalformedResponse(err.to_string())
        } else {
            RegistrationError::Transport(err.to_string())
        }
    }
}
