//! Error types used throughout mediafile.
//!
//! [`ValidationError`] is the only failure the `MediaFile` constructor can
//! report. [`Error`] wraps it together with the JSON failures that surround
//! construction when records are read from text.

/// A required part of a media file record was missing or had the wrong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// No input record was supplied at all.
    #[error("missing input")]
    MissingInput,

    /// `mimeType` was absent, not a string, or empty.
    #[error("mimeType required")]
    MimeTypeRequired,

    /// `url` was absent, not a string, or empty.
    #[error("url required")]
    UrlRequired,
}

impl ValidationError {
    /// Name of the offending field, if the error concerns a single field.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingInput => None,
            Self::MimeTypeRequired => Some("mimeType"),
            Self::UrlRequired => Some("url"),
        }
    }
}

/// Error type for reading media file records from JSON.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The record failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The input text was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The validation failure behind this error, if that is what it is.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::MissingInput.to_string(), "missing input");
        assert_eq!(
            ValidationError::MimeTypeRequired.to_string(),
            "mimeType required"
        );
        assert_eq!(ValidationError::UrlRequired.to_string(), "url required");
    }

    #[test]
    fn test_validation_field() {
        assert_eq!(ValidationError::MissingInput.field(), None);
        assert_eq!(ValidationError::MimeTypeRequired.field(), Some("mimeType"));
        assert_eq!(ValidationError::UrlRequired.field(), Some("url"));
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(ValidationError::UrlRequired);
        assert_eq!(err.to_string(), "Validation error: url required");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn test_as_validation() {
        let err = Error::from(ValidationError::MimeTypeRequired);
        assert_eq!(err.as_validation(), Some(&ValidationError::MimeTypeRequired));
    }

    #[test]
    fn test_result_type() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(ok_fn().unwrap(), 42);

        fn error_fn() -> Result<i32> {
            Err(ValidationError::MissingInput.into())
        }
        assert!(error_fn().is_err());
    }
}
