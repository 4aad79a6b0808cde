//! Error types for record operations

use thiserror::Error;

/// Errors that can occur while building or reshaping records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A mapping (or JSON text) was required but something else was given
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Keyed access to an absent key
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Attribute-style access to an absent key
    #[error("Record has no attribute '{0}'")]
    AttributeNotFound(String),

    /// A record in a list conversion lacks the configured field
    #[error("Record at index {index} is missing field '{field}'")]
    FieldMissing { field: String, index: usize },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl RecordError {
    pub(crate) fn type_mismatch(expected: &str, found: &str) -> Self {
        RecordError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::JsonParse(e.to_string())
    }
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::KeyNotFound("lang".to_string());
        assert_eq!(err.to_string(), "Key not found: lang");

        let err = RecordError::AttributeNotFound("lang".to_string());
        assert!(err.to_string().contains("no attribute 'lang'"));

        let err = RecordError::FieldMissing {
            field: "label".to_string(),
            index: 3,
        };
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("'label'"));
    }

    #[test]
    fn test_from_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: RecordError = parse_err.into();
        assert!(matches!(err, RecordError::JsonParse(_)));
    }
}
