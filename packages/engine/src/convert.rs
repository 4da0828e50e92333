//! List conversion orchestration
//!
//! The single entry point of the engine: resolve the recipe for the
//! requested list type, extract and format every region it defines, and
//! assemble the HTML document. The conversion is a pure function of its
//! inputs; any failure aborts the whole render, so partial HTML is never
//! returned.

use crate::bundle::LanguageBundle;
use crate::error::{ConvertError, Result};
use crate::html::{assemble, Document, Region, VenueBlock};
use crate::locale;
use crate::recipe::{Presence, VenueSpec};
use crate::registry::TemplateRegistry;
use crate::resolver::{is_present, require_path, resolve_path, value_text};
use crate::table::{self, RenderedTable};
use crate::text::substitute;
use crate::types::Metadata;
use serde_json::Value;
use std::collections::HashMap;

/// Converts list payloads to HTML documents using a recipe registry.
pub struct ListConverter {
    registry: TemplateRegistry,
}

impl ListConverter {
    /// Create a converter over a caller-supplied registry.
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Create a converter over the recipes embedded in the crate.
    pub fn with_builtin() -> Result<Self> {
        Ok(Self::new(TemplateRegistry::builtin()?))
    }

    /// The registry this converter renders from.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Convert one publication. See the crate-level docs for the contract.
    pub fn convert(
        &self,
        payload: &Value,
        metadata: &HashMap<String, String>,
        bundle: &Value,
    ) -> Result<String> {
        convert_with(&self.registry, payload, metadata, bundle)
    }
}

/// Convert one publication using the process-wide built-in registry.
///
/// # Arguments
/// * `payload` - list-type-specific input document
/// * `metadata` - flat metadata record (`contentDate`, `provenance`,
///   `language`, `listType`, optionally `lastReceivedDate`)
/// * `bundle` - parsed language bundle for the requested language
///
/// # Returns
/// The complete HTML document. Identical inputs yield identical bytes.
pub fn convert(
    payload: &Value,
    metadata: &HashMap<String, String>,
    bundle: &Value,
) -> Result<String> {
    convert_with(TemplateRegistry::shared()?, payload, metadata, bundle)
}

fn convert_with(
    registry: &TemplateRegistry,
    payload: &Value,
    metadata: &HashMap<String, String>,
    bundle_root: &Value,
) -> Result<String> {
    let meta = Metadata::from_map(metadata)?;
    let recipe = registry.get(&meta.list_type)?;
    tracing::debug!(
        list_type = %meta.list_type,
        language = ?meta.language,
        "Selected recipe"
    );

    let bundle = LanguageBundle::new(bundle_root, &meta.list_type);

    // contentDate is required and must parse regardless of which regions
    // use it; it also feeds the {date} placeholder in static text.
    let content_date = locale::format_content_date(&meta.content_date)?;

    let heading = bundle.require(&recipe.heading_key)?.to_string();

    let date_line = recipe
        .date_line
        .map(|style| locale::date_line(&meta.content_date, style, meta.language))
        .transpose()?;

    let last_updated = match recipe.last_updated {
        Some(Presence::Required) => match meta.last_received_date.as_deref() {
            Some(timestamp) => Some(locale::last_updated_line(timestamp, meta.language)?),
            None => return Err(ConvertError::MissingMetadata("lastReceivedDate".to_string())),
        },
        Some(Presence::Optional) => meta
            .last_received_date
            .as_deref()
            .map(|timestamp| locale::last_updated_line(timestamp, meta.language))
            .transpose()?,
        None => None,
    };

    let venue = recipe
        .venue
        .as_ref()
        .map(|spec| resolve_venue(spec, payload, &meta.list_type))
        .transpose()?
        .flatten();

    let mut tables: Vec<RenderedTable> = Vec::new();
    for spec in &recipe.tables {
        tables.extend(table::build_tables(spec, payload, &bundle, &meta.list_type)?);
    }
    let hearing_count: usize = tables.iter().map(|t| t.rows.len()).sum();
    let count_text = hearing_count.to_string();

    let vars: Vec<(&str, &str)> = vec![
        ("date", content_date.as_str()),
        ("count", count_text.as_str()),
        ("listType", meta.list_type.as_str()),
    ];

    let paragraphs = recipe
        .paragraphs
        .iter()
        .map(|spec| {
            let template = bundle.require(&spec.key)?;
            Ok(Region {
                id: spec.id.clone(),
                html: substitute(template, &vars),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut panels = Vec::new();
    for spec in &recipe.panels {
        match &spec.path {
            Some(path) => {
                // Presence predicate, evaluated once per panel
                if !is_present(payload, path) {
                    tracing::debug!(panel = %spec.id, "Optional panel absent, omitted");
                    continue;
                }
                let template = bundle.require(&spec.key)?;
                let value = resolve_path(payload, path).map(value_text).unwrap_or_default();
                let mut panel_vars = vars.clone();
                panel_vars.push(("value", value.as_str()));
                panels.push(Region {
                    id: spec.id.clone(),
                    html: substitute(template, &panel_vars),
                });
            }
            None => panels.push(Region {
                id: spec.id.clone(),
                html: substitute(bundle.require(&spec.key)?, &vars),
            }),
        }
    }

    let document = Document {
        language: meta.language,
        provenance: meta.provenance.clone(),
        heading,
        venue,
        date_line,
        last_updated,
        paragraphs,
        panels,
        tables,
    };

    Ok(assemble(&document))
}

/// Resolve the venue block, honoring its optional flag.
fn resolve_venue(
    spec: &VenueSpec,
    payload: &Value,
    list_type: &str,
) -> Result<Option<VenueBlock>> {
    let name = if spec.optional {
        match resolve_path(payload, &spec.name) {
            Some(value) if !value.is_null() => value_text(value),
            _ => return Ok(None),
        }
    } else {
        value_text(require_path(payload, &spec.name, list_type)?)
    };

    let address_lines = spec
        .address
        .as_deref()
        .and_then(|path| resolve_path(payload, path))
        .map(|value| match value {
            Value::Array(lines) => lines.iter().map(value_text).collect(),
            other => vec![value_text(other)],
        })
        .unwrap_or_default();

    let email = spec
        .email
        .as_deref()
        .and_then(|path| resolve_path(payload, path))
        .filter(|v| !v.is_null())
        .map(value_text);
    let phone = spec
        .phone
        .as_deref()
        .and_then(|path| resolve_path(payload, path))
        .filter(|v| !v.is_null())
        .map(value_text);

    Ok(Some(VenueBlock {
        name,
        address_lines,
        email,
        phone,
    }))
}
