use thiserror::Error;

/// Errors crossing the frontend/backend boundary.
///
/// `Clone` is required: the query cache broadcasts a single failure to every
/// caller coalesced onto the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client-side validation failed; nothing was dispatched.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// The request never produced an HTTP response (network down, CORS, DNS).
    #[error("error de red: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status other than 404.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The requested id does not exist on the backend.
    #[error("recurso no encontrado")]
    NotFound,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field the error is attached to, for inline display next to an input.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_field() {
        let err = ApiError::validation("amount", "El monto no puede ser negativo");
        assert_eq!(err.field(), Some("amount"));
        assert_eq!(err.to_string(), "El monto no puede ser negativo");
    }

    #[test]
    fn test_server_error_message() {
        let err = ApiError::Server {
            status: 500,
            message: "internal".into(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal");
        assert_eq!(err.field(), None);
    }
}
