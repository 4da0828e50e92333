//! Error types for the list conversion engine

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// List type has no registered recipe
    #[error("Unknown list type: {0}")]
    UnknownListType(String),

    /// Required metadata key missing from the request
    #[error("Required metadata missing: {0}")]
    MissingMetadata(String),

    /// Language value is not one of the supported languages
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),

    /// Required field absent from the input document
    #[error("Required field '{path}' not found in payload for list type '{list_type}'")]
    MissingField { list_type: String, path: String },

    /// Recipe references a key absent from the supplied language bundle
    #[error("Bundle key '{key}' not found for list type '{list_type}'")]
    MissingBundleKey { list_type: String, key: String },

    /// Type mismatch while resolving a field
    #[error("Type mismatch at '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Unparsable date or date-time value
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Malformed or inconsistent recipe definition
    #[error("Invalid recipe: {0}")]
    RecipeError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error (recipe file operations)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::UnknownListType("FOO_DAILY_LIST".to_string());
        assert_eq!(err.to_string(), "Unknown list type: FOO_DAILY_LIST");
    }

    #[test]
    fn test_missing_field_display() {
        let err = ConvertError::MissingField {
            list_type: "CST_WEEKLY_HEARING_LIST".to_string(),
            path: "hearings".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Required field 'hearings' not found in payload for list type 'CST_WEEKLY_HEARING_LIST'"
        );
    }

    #[test]
    fn test_missing_bundle_key_display() {
        let err = ConvertError::MissingBundleKey {
            list_type: "SIAC_WEEKLY_HEARING_LIST".to_string(),
            key: "tableHeaders.appellant".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bundle key 'tableHeaders.appellant' not found for list type 'SIAC_WEEKLY_HEARING_LIST'"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = ConvertError::TypeMismatch {
            path: "hearings".to_string(),
            expected: "array".to_string(),
            actual: "object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch at 'hearings': expected array, got object"
        );
    }
}
