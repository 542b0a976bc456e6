//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0} already in progress")]
    Busy(&'static str),
}

/// Coarse classification of an [`SdkError`], used by front-ends to pick
/// how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally, nothing was sent.
    Validation,
    /// No response reached the client.
    Unreachable,
    /// A response arrived but its body was not usable JSON.
    MalformedResponse,
    /// The backend answered with a failure.
    Rejected,
    /// Local session persistence failed.
    Storage,
    /// The same action is already in flight.
    Busy,
    /// A client-side fault, such as a request that could not be encoded.
    Internal,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Validation(_) => ErrorKind::Validation,
            SdkError::Http(HttpError::Unreachable(_)) => ErrorKind::Unreachable,
            SdkError::Http(HttpError::MalformedResponse(_)) => ErrorKind::MalformedResponse,
            SdkError::Http(HttpError::Rejected { .. }) => ErrorKind::Rejected,
            SdkError::Http(HttpError::RequestEncoding(_)) => ErrorKind::Internal,
            SdkError::Store(_) => ErrorKind::Storage,
            SdkError::Busy(_) => ErrorKind::Busy,
        }
    }

    /// Text suitable for showing to an operator or administrator.
    ///
    /// Rejections surface the backend's message verbatim; transport failures
    /// get a fixed explanation.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Validation(e) => e.to_string(),
            SdkError::Http(HttpError::Unreachable(_)) => {
                "Failed to connect to server. Check that the backend is running.".to_string()
            }
            SdkError::Http(HttpError::MalformedResponse(_)) => {
                "Invalid response from server.".to_string()
            }
            SdkError::Http(HttpError::Rejected { message, .. }) => message.clone(),
            SdkError::Http(HttpError::RequestEncoding(_)) => {
                "Could not prepare the request.".to_string()
            }
            SdkError::Store(e) => format!("Could not persist session: {e}"),
            SdkError::Busy(action) => format!("{action} already in progress"),
        }
    }
}

/// Transport-level errors. Every network failure is normalized into one of these.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// A response was received but could not be parsed as the expected JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request body could not be encoded; nothing was sent.
    #[error("Could not encode request: {0}")]
    RequestEncoding(String),

    /// A well-formed failure: non-2xx status or `success: false` payload.
    #[error("Rejected: {message}")]
    Rejected {
        status: Option<u16>,
        message: String,
    },
}

/// Local, pre-network validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("instrument is required")]
    EmptyInstrument,

    #[error("quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("please enter a valid rate")]
    InvalidRate,

    #[error("limit must be greater than zero")]
    InvalidLimit,
}

/// Session persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let e: SdkError = ValidationError::NonPositiveQuantity.into();
        assert_eq!(e.kind(), ErrorKind::Validation);

        let e: SdkError = HttpError::Unreachable("connection refused".into()).into();
        assert_eq!(e.kind(), ErrorKind::Unreachable);

        let e: SdkError = HttpError::MalformedResponse("eof".into()).into();
        assert_eq!(e.kind(), ErrorKind::MalformedResponse);

        let e: SdkError = HttpError::Rejected {
            status: Some(403),
            message: "Solo administradores pueden ver reportes".into(),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::Rejected);

        assert_eq!(SdkError::Busy("order submission").kind(), ErrorKind::Busy);

        let e: SdkError = HttpError::RequestEncoding("key must be a string".into()).into();
        assert_eq!(e.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_rejected_message_is_verbatim() {
        let e: SdkError = HttpError::Rejected {
            status: None,
            message: "Contraseña incorrecta".into(),
        }
        .into();
        assert_eq!(e.user_message(), "Contraseña incorrecta");
    }

    #[test]
    fn test_unreachable_message_mentions_backend() {
        let e: SdkError = HttpError::Unreachable("tcp connect error".into()).into();
        assert!(e.user_message().contains("backend is running"));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NonPositiveQuantity.to_string(),
            "quantity must be greater than zero"
        );
        assert_eq!(
            ValidationError::InvalidRate.to_string(),
            "please enter a valid rate"
        );
    }

    #[test]
    fn test_rejected_display_uses_message() {
        let e = HttpError::Rejected {
            status: Some(401),
            message: "Sesión inválida o expirada".into(),
        };
        assert_eq!(e.to_string(), "Rejected: Sesión inválida o expirada");
    }
}
