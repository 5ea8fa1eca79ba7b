//! Normalized request errors.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the UI can see from a request arrives as an [`ApiError`].
//! Screens show [`ApiError::user_message`] in a toast and leave their state
//! untouched; nothing here is fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the server gives no usable message.
pub const GENERIC_MESSAGE: &str = "Something went wrong";

/// Failure to get any HTTP response at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered `401`. The session has already been torn down.
    #[error("unauthorized")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// Any other non-2xx status, with the body's `message` when present.
    #[error("server error: status {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// The one message screens display, whatever the underlying cause.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_MESSAGE.to_owned(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(detail) => Self::Network(detail),
            TransportError::Timeout => Self::Timeout,
        }
    }
}
