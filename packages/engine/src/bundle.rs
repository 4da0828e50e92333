//! Language-bundle lookup
//!
//! A bundle is the parsed per-(list type, language) resource tree supplied
//! by the caller. Recipe keys are dot-notation paths into it; `{listType}`
//! in a key is interpolated with the requested list type, which is how a
//! family of regional variants sharing one recipe draws distinct text.
//!
//! A key a recipe references but the bundle lacks is a data-integrity
//! defect and fails the whole conversion; nothing is defaulted.

use crate::error::{ConvertError, Result};
use crate::resolver::resolve_path;
use serde_json::Value;

/// Read-only view over one language's bundle for one list type.
#[derive(Debug, Clone, Copy)]
pub struct LanguageBundle<'a> {
    root: &'a Value,
    list_type: &'a str,
}

impl<'a> LanguageBundle<'a> {
    /// Wrap a parsed bundle for lookups on behalf of `list_type`.
    pub fn new(root: &'a Value, list_type: &'a str) -> Self {
        Self { root, list_type }
    }

    /// Interpolate `{listType}` into a recipe-declared key.
    pub fn interpolate_key(&self, key: &str) -> String {
        key.replace("{listType}", self.list_type)
    }

    /// Look up a key, returning the string value if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        let interpolated = self.interpolate_key(key);
        resolve_path(self.root, &interpolated).and_then(Value::as_str)
    }

    /// Look up a key that the recipe requires.
    ///
    /// # Errors
    /// `ConvertError::MissingBundleKey` when the key is absent or not a
    /// string; the interpolated key is reported for diagnosis.
    pub fn require(&self, key: &str) -> Result<&'a str> {
        self.get(key).ok_or_else(|| ConvertError::MissingBundleKey {
            list_type: self.list_type.to_string(),
            key: self.interpolate_key(key),
        })
    }
}
