//! Core types for the list conversion engine

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Publication language for a rendered list.
///
/// Every artefact is published in exactly one of the two supported
/// languages; the caller supplies a bundle matching the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    English,
    Welsh,
}

impl Language {
    /// Parse the `language` metadata value ("ENGLISH" | "WELSH").
    pub fn from_metadata(value: &str) -> Result<Self> {
        match value {
            "ENGLISH" => Ok(Language::English),
            "WELSH" => Ok(Language::Welsh),
            other => Err(ConvertError::InvalidLanguage(other.to_string())),
        }
    }

    /// BCP 47 language tag for the document's `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Welsh => "cy",
        }
    }
}

/// Flat metadata record accompanying every rendering request.
///
/// Parsed from the caller-supplied string map; required keys are
/// `contentDate`, `provenance`, `language` and `listType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Date the list content applies to (ISO-8601 date or date-time)
    pub content_date: String,
    /// Opaque source identifier, passed through uninterpreted
    pub provenance: String,
    /// Requested publication language
    pub language: Language,
    /// Key into the template registry
    pub list_type: String,
    /// Timestamp the artefact was last received (ISO-8601), if supplied
    pub last_received_date: Option<String>,
}

impl Metadata {
    /// Build a `Metadata` from the flat string map supplied by the caller.
    ///
    /// # Errors
    /// * `ConvertError::MissingMetadata` - a required key is absent or empty
    /// * `ConvertError::InvalidLanguage` - `language` is not a supported value
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        let require = |key: &str| -> Result<String> {
            match map.get(key) {
                Some(value) if !value.is_empty() => Ok(value.clone()),
                _ => Err(ConvertError::MissingMetadata(key.to_string())),
            }
        };

        Ok(Metadata {
            content_date: require("contentDate")?,
            provenance: require("provenance")?,
            language: Language::from_metadata(&require("language")?)?,
            list_type: require("listType")?,
            last_received_date: map.get("lastReceivedDate").cloned().filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_map(entries: Vec<(&str, &str)>) -> HashMap<String, String> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_language_from_metadata() {
        assert_eq!(Language::from_metadata("ENGLISH").unwrap(), Language::English);
        assert_eq!(Language::from_metadata("WELSH").unwrap(), Language::Welsh);
        assert!(matches!(
            Language::from_metadata("FRENCH"),
            Err(ConvertError::InvalidLanguage(_))
        ));
        // Case-sensitive by contract
        assert!(Language::from_metadata("english").is_err());
    }

    #[test]
    fn test_html_lang() {
        assert_eq!(Language::English.html_lang(), "en");
        assert_eq!(Language::Welsh.html_lang(), "cy");
    }

    #[test]
    fn test_metadata_from_map() {
        let map = metadata_map(vec![
            ("contentDate", "2025-04-22"),
            ("provenance", "MANUAL_UPLOAD"),
            ("language", "ENGLISH"),
            ("listType", "CST_WEEKLY_HEARING_LIST"),
            ("lastReceivedDate", "2025-04-21T09:30:00Z"),
        ]);

        let meta = Metadata::from_map(&map).unwrap();
        assert_eq!(meta.content_date, "2025-04-22");
        assert_eq!(meta.provenance, "MANUAL_UPLOAD");
        assert_eq!(meta.language, Language::English);
        assert_eq!(meta.list_type, "CST_WEEKLY_HEARING_LIST");
        assert_eq!(meta.last_received_date.as_deref(), Some("2025-04-21T09:30:00Z"));
    }

    #[test]
    fn test_metadata_optional_last_received() {
        let map = metadata_map(vec![
            ("contentDate", "2025-04-22"),
            ("provenance", "LIST_ASSIST"),
            ("language", "WELSH"),
            ("listType", "PHT_WEEKLY_HEARING_LIST"),
        ]);

        let meta = Metadata::from_map(&map).unwrap();
        assert_eq!(meta.last_received_date, None);
    }

    #[test]
    fn test_metadata_missing_required_key() {
        let map = metadata_map(vec![
            ("contentDate", "2025-04-22"),
            ("language", "ENGLISH"),
            ("listType", "CST_WEEKLY_HEARING_LIST"),
        ]);

        match Metadata::from_map(&map) {
            Err(ConvertError::MissingMetadata(key)) => assert_eq!(key, "provenance"),
            other => panic!("expected MissingMetadata, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_empty_value_is_missing() {
        let map = metadata_map(vec![
            ("contentDate", ""),
            ("provenance", "MANUAL_UPLOAD"),
            ("language", "ENGLISH"),
            ("listType", "CST_WEEKLY_HEARING_LIST"),
        ]);

        assert!(matches!(
            Metadata::from_map(&map),
            Err(ConvertError::MissingMetadata(_))
        ));
    }
}
