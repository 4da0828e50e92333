//! Courtlist Conversion Engine
//!
//! A metadata-driven renderer for non-strategic court and tribunal hearing
//! lists. This library provides functionality for:
//! - Loading and validating declarative list-type recipes (YAML)
//! - Resolving list payloads, metadata and language bundles into regions
//! - Assembling deterministic, bilingual HTML documents
//!
//! # Example
//!
//! ```ignore
//! use courtlist_engine::convert;
//! use std::collections::HashMap;
//!
//! let metadata: HashMap<String, String> = [
//!     ("contentDate", "2025-04-22"),
//!     ("provenance", "MANUAL_UPLOAD"),
//!     ("language", "ENGLISH"),
//!     ("listType", "CST_WEEKLY_HEARING_LIST"),
//!     ("lastReceivedDate", "2025-04-21T09:30:00Z"),
//! ]
//! .iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let html = convert(&payload, &metadata, &bundle)?;
//! ```

pub mod bundle;
pub mod config;
pub mod convert;
pub mod error;
pub mod html;
pub mod locale;
pub mod recipe;
pub mod registry;
pub mod resolver;
pub mod table;
pub mod text;
pub mod types;

// Re-export commonly used items
pub use bundle::LanguageBundle;
pub use convert::{convert, ListConverter};
pub use error::{ConvertError, Result};
pub use recipe::{
    DateLineStyle, PanelSpec, ParagraphSpec, Presence, Recipe, RepeatSpec, TableSpec, VenueSpec,
};
pub use registry::TemplateRegistry;
pub use table::RenderedTable;
pub use types::{Language, Metadata};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
