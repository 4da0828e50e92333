//! Field resolution over input documents
//!
//! Recipes declare where data lives in a payload as dot-notation paths
//! (`venue.venueName`, `venues.0.hearings`). Numeric segments index arrays.
//! Path depth is bounded at recipe-validation time by
//! [`crate::config::MAX_PATH_DEPTH`], so resolution itself is a simple walk.

use crate::error::{ConvertError, Result};
use serde_json::Value;

/// Resolve a dot-notation path against a document.
///
/// Returns `None` if any segment is absent, out of bounds, or applied to a
/// value that cannot contain it (e.g. a key lookup on a string).
pub fn resolve_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

/// Resolve a path that the recipe marks as required.
///
/// # Errors
/// `ConvertError::MissingField` with the list type and path for diagnosis.
pub fn require_path<'a>(doc: &'a Value, path: &str, list_type: &str) -> Result<&'a Value> {
    resolve_path(doc, path).ok_or_else(|| ConvertError::MissingField {
        list_type: list_type.to_string(),
        path: path.to_string(),
    })
}

/// Presence predicate for optional regions.
///
/// A region is present when its path resolves to a non-null value; a JSON
/// `null` counts as absent so upstream systems can blank out a section
/// without removing the key.
pub fn is_present(doc: &Value, path: &str) -> bool {
    matches!(resolve_path(doc, path), Some(value) if !value.is_null())
}

/// Render a resolved value as cell/line text.
///
/// Strings pass through verbatim; numbers and booleans use their canonical
/// display form; null renders empty; arrays join their elements with a
/// comma; objects render empty (a recipe pointing a cell at an object is a
/// recipe defect, surfaced by its tests rather than leaked into output).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => String::new(),
    }
}

/// JSON type name for diagnostics.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
