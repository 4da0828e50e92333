//! Table building
//!
//! Projects an array-shaped payload section into header/row form per a
//! recipe's [`TableSpec`]. Row order is payload order; every row carries
//! exactly as many cells as the header row (absent column values become
//! empty cells). A repeat-group spec expands into one complete block per
//! group element, each with its own header row.

use crate::bundle::LanguageBundle;
use crate::config;
use crate::error::{ConvertError, Result};
use crate::recipe::TableSpec;
use crate::resolver::{resolve_path, value_text, value_type_name};
use serde_json::Value;

/// One fully resolved table block, ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    /// Stable element identifier
    pub id: String,
    /// Block title (venue name) for repeated blocks
    pub title: Option<String>,
    /// Header cell texts from the bundle
    pub header: Vec<String>,
    /// Body rows; each row has exactly `header.len()` cells
    pub rows: Vec<Vec<String>>,
}

/// Build every table block a specification yields for this payload.
///
/// A non-repeating spec yields zero (optional, absent) or one block; a
/// repeating spec yields one block per group element.
pub fn build_tables(
    spec: &TableSpec,
    doc: &Value,
    bundle: &LanguageBundle<'_>,
    list_type: &str,
) -> Result<Vec<RenderedTable>> {
    let header: Vec<String> = spec
        .header_keys
        .iter()
        .map(|key| bundle.require(key).map(str::to_string))
        .collect::<Result<_>>()?;

    match &spec.repeat {
        Some(repeat) => {
            let groups = match resolve_path(doc, &repeat.path) {
                Some(value) => as_array(value, &repeat.path)?,
                None if spec.optional => return Ok(Vec::new()),
                None => {
                    return Err(ConvertError::MissingField {
                        list_type: list_type.to_string(),
                        path: repeat.path.clone(),
                    })
                }
            };
            if groups.len() > config::MAX_REPEAT_GROUPS {
                return Err(ConvertError::RecipeError(format!(
                    "Table '{}' repeats over {} groups, maximum is {}",
                    spec.id,
                    groups.len(),
                    config::MAX_REPEAT_GROUPS
                )));
            }

            let mut blocks = Vec::with_capacity(groups.len());
            for (index, group) in groups.iter().enumerate() {
                let section_path = format!("{}.{}.{}", repeat.path, index, spec.path);
                let section = require_section(group, &spec.path, &section_path, list_type)?;
                let title = repeat
                    .title
                    .as_deref()
                    .and_then(|path| resolve_path(group, path))
                    .map(value_text);
                blocks.push(build_block(
                    spec,
                    format!("{}-{}", spec.id, index + 1),
                    title,
                    header.clone(),
                    section,
                )?);
            }
            tracing::debug!(table = %spec.id, blocks = blocks.len(), "Built repeated table");
            Ok(blocks)
        }
        None => {
            let section = match resolve_path(doc, &spec.path) {
                Some(value) => as_array(value, &spec.path)?,
                None if spec.optional => return Ok(Vec::new()),
                None => {
                    return Err(ConvertError::MissingField {
                        list_type: list_type.to_string(),
                        path: spec.path.clone(),
                    })
                }
            };
            let block = build_block(spec, spec.id.clone(), None, header, section)?;
            tracing::debug!(table = %spec.id, rows = block.rows.len(), "Built table");
            Ok(vec![block])
        }
    }
}

/// Resolve a required row section inside a repeat group.
fn require_section<'a>(
    group: &'a Value,
    path: &str,
    diagnostic_path: &str,
    list_type: &str,
) -> Result<&'a Vec<Value>> {
    match resolve_path(group, path) {
        Some(value) => as_array(value, diagnostic_path),
        None => Err(ConvertError::MissingField {
            list_type: list_type.to_string(),
            path: diagnostic_path.to_string(),
        }),
    }
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| ConvertError::TypeMismatch {
        path: path.to_string(),
        expected: "array".to_string(),
        actual: value_type_name(value).to_string(),
    })
}

fn build_block(
    spec: &TableSpec,
    id: String,
    title: Option<String>,
    header: Vec<String>,
    section: &[Value],
) -> Result<RenderedTable> {
    if section.len() > config::MAX_TABLE_ROWS {
        return Err(ConvertError::RecipeError(format!(
            "Table '{}' has {} rows, maximum is {}",
            spec.id,
            section.len(),
            config::MAX_TABLE_ROWS
        )));
    }

    let rows = section
        .iter()
        .map(|element| {
            spec.columns
                .iter()
                .map(|column| {
                    resolve_path(element, column)
                        .map(value_text)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    Ok(RenderedTable {
        id,
        title,
        header,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{RepeatSpec, TableSpec};
    use serde_json::json;

    fn hearing_spec() -> TableSpec {
        TableSpec {
            id: "hearing-table".to_string(),
            path: "hearings".to_string(),
            columns: vec!["appellant".to_string(), "hearingTime".to_string()],
            header_keys: vec![
                "tableHeaders.appellant".to_string(),
                "tableHeaders.hearingTime".to_string(),
            ],
            optional: false,
            repeat: None,
        }
    }

    fn test_bundle() -> Value {
        json!({
            "tableHeaders": {
                "appellant": "Appellant",
                "hearingTime": "Hearing time"
            }
        })
    }

    #[test]
    fn test_single_table_rows_in_payload_order() {
        let doc = json!({
            "hearings": [
                {"appellant": "B Appellant", "hearingTime": "2pm"},
                {"appellant": "A Appellant", "hearingTime": "10am"}
            ]
        });
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        let tables =
            build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST").unwrap();
        assert_eq!(tables.len(), 1);

        let table = &tables[0];
        assert_eq!(table.header, vec!["Appellant", "Hearing time"]);
        assert_eq!(table.rows.len(), 2);
        // Input order preserved, no sorting
        assert_eq!(table.rows[0], vec!["B Appellant", "2pm"]);
        assert_eq!(table.rows[1], vec!["A Appellant", "10am"]);
    }

    #[test]
    fn test_missing_column_value_keeps_arity() {
        let doc = json!({"hearings": [{"appellant": "A Appellant"}]});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        let tables =
            build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST").unwrap();
        let table = &tables[0];
        assert_eq!(table.rows[0].len(), table.header.len());
        assert_eq!(table.rows[0], vec!["A Appellant", ""]);
    }

    #[test]
    fn test_empty_section_yields_header_only_table() {
        let doc = json!({"hearings": []});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        let tables =
            build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].header.len(), 2);
        assert!(tables[0].rows.is_empty());
    }

    #[test]
    fn test_missing_required_section_is_error() {
        let doc = json!({});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        match build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST") {
            Err(ConvertError::MissingField { path, .. }) => assert_eq!(path, "hearings"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_optional_section_omits_table() {
        let mut spec = hearing_spec();
        spec.optional = true;
        let doc = json!({});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        let tables = build_tables(&spec, &doc, &bundle, "CST_WEEKLY_HEARING_LIST").unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_non_array_section_is_type_mismatch() {
        let doc = json!({"hearings": {"oops": true}});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        assert!(matches!(
            build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST"),
            Err(ConvertError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_header_key_is_bundle_error() {
        let doc = json!({"hearings": []});
        let bundle_root = json!({"tableHeaders": {"appellant": "Appellant"}});
        let bundle = LanguageBundle::new(&bundle_root, "CST_WEEKLY_HEARING_LIST");

        assert!(matches!(
            build_tables(&hearing_spec(), &doc, &bundle, "CST_WEEKLY_HEARING_LIST"),
            Err(ConvertError::MissingBundleKey { .. })
        ));
    }

    #[test]
    fn test_repeat_groups_produce_separate_blocks() {
        let mut spec = hearing_spec();
        spec.repeat = Some(RepeatSpec {
            path: "venues".to_string(),
            title: Some("venueName".to_string()),
        });

        let doc = json!({
            "venues": [
                {
                    "venueName": "Alfred Place",
                    "hearings": [{"appellant": "First", "hearingTime": "10am"}]
                },
                {
                    "venueName": "Havant Justice Centre",
                    "hearings": [
                        {"appellant": "Second", "hearingTime": "11am"},
                        {"appellant": "Third", "hearingTime": "2pm"}
                    ]
                }
            ]
        });
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "RPT_LONDON_WEEKLY_HEARING_LIST");

        let tables =
            build_tables(&spec, &doc, &bundle, "RPT_LONDON_WEEKLY_HEARING_LIST").unwrap();
        assert_eq!(tables.len(), 2);

        assert_eq!(tables[0].id, "hearing-table-1");
        assert_eq!(tables[0].title.as_deref(), Some("Alfred Place"));
        assert_eq!(tables[0].rows.len(), 1);

        assert_eq!(tables[1].id, "hearing-table-2");
        assert_eq!(tables[1].title.as_deref(), Some("Havant Justice Centre"));
        assert_eq!(tables[1].rows.len(), 2);

        // Header set repeats per block, never deduplicated
        assert_eq!(tables[0].header, tables[1].header);
    }

    #[test]
    fn test_repeat_group_missing_rows_is_error() {
        let mut spec = hearing_spec();
        spec.repeat = Some(RepeatSpec {
            path: "venues".to_string(),
            title: None,
        });

        let doc = json!({"venues": [{"venueName": "Alfred Place"}]});
        let bundle_root = test_bundle();
        let bundle = LanguageBundle::new(&bundle_root, "RPT_LONDON_WEEKLY_HEARING_LIST");

        match build_tables(&spec, &doc, &bundle, "RPT_LONDON_WEEKLY_HEARING_LIST") {
            Err(ConvertError::MissingField { path, .. }) => {
                assert_eq!(path, "venues.0.hearings");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
