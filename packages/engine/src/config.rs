//! Configuration constants for the list conversion engine
//!
//! Centralized limits used throughout the engine for:
//! - Security limits (prevent DoS via oversized recipe files)
//! - Resource constraints (memory)
//! - Recursion depth limits (prevent stack overflow)
//!
//! Recipes shipped with the crate are trusted, but `TemplateRegistry::from_dir`
//! accepts operator-supplied files, so the same limits apply to both paths.

/// Maximum recipe YAML file size in bytes (1 MB).
///
/// Prevents YAML bomb attacks and excessive memory usage during parsing.
/// A recipe file describing an entire tribunal family is typically 1-5 KB.
pub const MAX_RECIPE_FILE_SIZE: usize = 1_000_000;

/// Maximum number of list-type keys that can be registered simultaneously.
///
/// The courts and tribunals estate publishes on the order of dozens of
/// non-strategic list formats; 500 leaves generous headroom.
pub const MAX_LOADED_RECIPES: usize = 500;

/// Maximum number of segments in a field path.
///
/// Prevents pathological recipes like "a.a.a.a..." from walking deeply
/// nested payloads. Real list payloads nest 2-4 levels.
pub const MAX_PATH_DEPTH: usize = 32;

/// Maximum number of body rows rendered into a single table block.
///
/// A weekly list for a busy tribunal carries tens to low hundreds of
/// hearings; 10,000 rows indicates a malformed payload.
pub const MAX_TABLE_ROWS: usize = 10_000;

/// Maximum number of repeat-group blocks (venues) per table specification.
pub const MAX_REPEAT_GROUPS: usize = 100;
