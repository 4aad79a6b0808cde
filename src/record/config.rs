//! Options for record operations

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Options for [`Record::lookup`](super::Record::lookup)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOptions {
    /// Value returned when no path resolves to something else
    pub default: Field,
    /// Path segment delimiter
    pub delimiter: String,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            default: Field::Null,
            delimiter: ".".to_string(),
        }
    }
}

impl LookupOptions {
    /// Create options with defaults (`null` default, `.` delimiter)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback value
    pub fn with_default(mut self, default: impl Into<Field>) -> Self {
        self.default = default.into();
        self
    }

    /// Set the path delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// Options for [`normalize_keys`](crate::transform::normalize_keys)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Lowercase keys after replacing separators
    pub lowercase: bool,
    /// Replacement for each run of non-alphanumeric characters
    pub separator: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: "_".to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable lowercasing
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set the replacement separator (may be empty)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
