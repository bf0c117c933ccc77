use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Raised when the shared album sequence can no longer be trusted, e.g. a
    // writer panicked while holding the lock.
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            CatalogError::NotFound { message } => { message }
            CatalogError::Validation { message, .. } => { message }
            CatalogError::Serialization { message } => { message }
            CatalogError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for the album catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use crate::core::errors::CatalogError;

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CatalogError::validation("test", None), CatalogError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(CatalogError::serialization("test"), CatalogError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(CatalogError::runtime("test", None), CatalogError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CatalogError::from(err);
        assert!(matches!(err, CatalogError::Serialization{ message: _ }));
        assert!(err.message().starts_with("serde json parsing"));
    }

    #[tokio::test]
    async fn test_should_display_message() {
        assert_eq!("Album not found", CatalogError::not_found("Album not found").to_string());
        assert_eq!("bad port Some(\"ALBUMS_PORT\")",
                   CatalogError::validation("bad port", Some("ALBUMS_PORT".to_string())).to_string());
    }
}
