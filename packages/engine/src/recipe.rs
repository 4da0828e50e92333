//! Declarative list-type recipes
//!
//! A recipe is data, not code: it names the output regions a list type
//! renders, where their values live in the payload, and which bundle keys
//! supply their static text. Adding a list type means adding a YAML entry,
//! never a new control-flow branch.
//!
//! A single entry may serve a family of regional variants by listing several
//! `list_types`; per-variant static text is selected through `{listType}`
//! interpolation in bundle keys.

use crate::config;
use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Phrasing of the list-date line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLineStyle {
    /// "List for 22 April 2025"
    SingleDate,
    /// "List for week commencing 22 April 2025"
    WeekCommencing,
}

/// Whether a recipe-defined region tolerates absent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Absent input is a hard error
    Required,
    /// Absent input omits the region
    Optional,
}

/// Venue block specification: payload paths for the venue's contact lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSpec {
    /// Path to the venue name
    pub name: String,
    /// Path to the address (array of lines or a single string)
    #[serde(default)]
    pub address: Option<String>,
    /// Path to the venue email address
    #[serde(default)]
    pub email: Option<String>,
    /// Path to the venue telephone number
    #[serde(default)]
    pub phone: Option<String>,
    /// When true, an absent name omits the whole block
    #[serde(default)]
    pub optional: bool,
}

/// A static paragraph drawn from the bundle, always rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphSpec {
    /// Stable element identifier
    pub id: String,
    /// Bundle key supplying the paragraph text
    pub key: String,
}

/// An "important information" panel.
///
/// With a `path`, the panel renders only when that path resolves to a
/// non-null value (the presence predicate), and `{value}` in the bundle
/// template receives the resolved text. Without one, the panel is static.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Stable element identifier
    pub id: String,
    /// Bundle key supplying the panel template
    pub key: String,
    /// Presence predicate and value source
    #[serde(default)]
    pub path: Option<String>,
}

/// Multi-venue repetition: one full table block per group element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatSpec {
    /// Path to the array of group elements (venues)
    pub path: String,
    /// Path to the block title, relative to each group element
    #[serde(default)]
    pub title: Option<String>,
}

/// Table specification: an array section projected into header/row form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Stable element identifier (suffixed `-1`, `-2`, ... when repeated)
    pub id: String,
    /// Path to the row array; relative to each group element when repeating
    pub path: String,
    /// Ordered column paths projected from each row element
    pub columns: Vec<String>,
    /// Bundle keys supplying the column headers, one per column
    pub header_keys: Vec<String>,
    /// When true, an absent section omits the table
    #[serde(default)]
    pub optional: bool,
    /// Repeat the table per group element (multi-venue lists)
    #[serde(default)]
    pub repeat: Option<RepeatSpec>,
}

/// A complete rendering recipe for one or more list types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// List-type keys served by this recipe
    pub list_types: Vec<String>,
    /// Bundle key supplying the heading (and document title)
    pub heading_key: String,
    /// List-date line phrasing; absent means no date line region
    #[serde(default)]
    pub date_line: Option<DateLineStyle>,
    /// Last-updated region presence; absent means no such region
    #[serde(default)]
    pub last_updated: Option<Presence>,
    /// Venue block, if the list type renders one
    #[serde(default)]
    pub venue: Option<VenueSpec>,
    /// Static paragraphs in render order
    #[serde(default)]
    pub paragraphs: Vec<ParagraphSpec>,
    /// Important-information panels in render order
    #[serde(default)]
    pub panels: Vec<PanelSpec>,
    /// Table specifications in render order
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

impl Recipe {
    /// Parse a YAML document containing a list of recipes.
    pub fn list_from_yaml_str(content: &str) -> Result<Vec<Recipe>> {
        let recipes: Vec<Recipe> = serde_yaml::from_str(content).map_err(ConvertError::YamlError)?;
        for recipe in &recipes {
            recipe.validate()?;
        }
        Ok(recipes)
    }

    /// Load recipes from a YAML file, enforcing the size limit.
    pub fn list_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
        let path_ref = path.as_ref();
        tracing::debug!(path = %path_ref.display(), "Loading recipes from YAML file");

        let metadata = fs::metadata(path_ref)?;
        if metadata.len() as usize > config::MAX_RECIPE_FILE_SIZE {
            return Err(ConvertError::RecipeError(format!(
                "Recipe file {} exceeds maximum size of {} bytes",
                path_ref.display(),
                config::MAX_RECIPE_FILE_SIZE
            )));
        }

        let content = fs::read_to_string(path_ref)?;
        Self::list_from_yaml_str(&content)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// `ConvertError::RecipeError` when the recipe names no list types, a
    /// table's header and column counts disagree, a region identifier is
    /// duplicated or empty, or a declared path is too deep.
    pub fn validate(&self) -> Result<()> {
        let label = self
            .list_types
            .first()
            .map(String::as_str)
            .unwrap_or("<unnamed>");

        if self.list_types.is_empty() || self.list_types.iter().any(String::is_empty) {
            return Err(ConvertError::RecipeError(
                "Recipe must name at least one non-empty list type".to_string(),
            ));
        }

        let mut region_ids = HashSet::new();
        let mut check_id = |id: &str| -> Result<()> {
            if id.is_empty() {
                return Err(ConvertError::RecipeError(format!(
                    "{label}: region identifier must not be empty"
                )));
            }
            if !region_ids.insert(id.to_string()) {
                return Err(ConvertError::RecipeError(format!(
                    "{label}: duplicate region identifier '{id}'"
                )));
            }
            Ok(())
        };

        for paragraph in &self.paragraphs {
            check_id(&paragraph.id)?;
        }
        for panel in &self.panels {
            check_id(&panel.id)?;
        }
        for table in &self.tables {
            check_id(&table.id)?;

            if table.columns.is_empty() {
                return Err(ConvertError::RecipeError(format!(
                    "{label}: table '{}' declares no columns",
                    table.id
                )));
            }
            if table.header_keys.len() != table.columns.len() {
                return Err(ConvertError::RecipeError(format!(
                    "{label}: table '{}' has {} header keys for {} columns",
                    table.id,
                    table.header_keys.len(),
                    table.columns.len()
                )));
            }
        }

        for path in self.declared_paths() {
            let depth = path.split('.').count();
            if depth > config::MAX_PATH_DEPTH {
                return Err(ConvertError::RecipeError(format!(
                    "{label}: path '{path}' exceeds maximum depth of {}",
                    config::MAX_PATH_DEPTH
                )));
            }
        }

        Ok(())
    }

    /// Every payload path the recipe declares.
    fn declared_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        if let Some(venue) = &self.venue {
            paths.push(venue.name.as_str());
            paths.extend(venue.address.as_deref());
            paths.extend(venue.email.as_deref());
            paths.extend(venue.phone.as_deref());
        }
        for panel in &self.panels {
            paths.extend(panel.path.as_deref());
        }
        for table in &self.tables {
            paths.push(table.path.as_str());
            paths.extend(table.columns.iter().map(String::as_str));
            if let Some(repeat) = &table.repeat {
                paths.push(repeat.path.as_str());
                paths.extend(repeat.title.as_deref());
            }
        }
        paths
    }

    /// Every bundle key the recipe references, for completeness checking.
    ///
    /// Keys may contain `{listType}` and must be interpolated per variant
    /// before lookup.
    pub fn bundle_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.heading_key.as_str()];
        keys.extend(self.paragraphs.iter().map(|p| p.key.as_str()));
        keys.extend(self.panels.iter().map(|p| p.key.as_str()));
        for table in &self.tables {
            keys.extend(table.header_keys.iter().map(String::as_str));
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKLY_RECIPE_YAML: &str = r#"
- list_types:
    - CST_WEEKLY_HEARING_LIST
    - PHT_WEEKLY_HEARING_LIST
  heading_key: "heading.{listType}"
  date_line: week_commencing
  last_updated: required
  paragraphs:
    - id: open-justice
      key: openJustice
  panels:
    - id: important-information
      key: importantInformation
      path: generalInformation
  tables:
    - id: hearing-table
      path: hearings
      columns: [appellant, appealReferenceNumber, hearingTime]
      header_keys:
        - tableHeaders.appellant
        - tableHeaders.appealReferenceNumber
        - tableHeaders.hearingTime
"#;

    #[test]
    fn test_parse_weekly_recipe() {
        let recipes = Recipe::list_from_yaml_str(WEEKLY_RECIPE_YAML).unwrap();
        assert_eq!(recipes.len(), 1);

        let recipe = &recipes[0];
        assert_eq!(recipe.list_types.len(), 2);
        assert_eq!(recipe.heading_key, "heading.{listType}");
        assert_eq!(recipe.date_line, Some(DateLineStyle::WeekCommencing));
        assert_eq!(recipe.last_updated, Some(Presence::Required));
        assert!(recipe.venue.is_none());
        assert_eq!(recipe.tables[0].columns.len(), 3);
        assert_eq!(recipe.panels[0].path.as_deref(), Some("generalInformation"));
    }

    #[test]
    fn test_undeclared_regions_default_to_absent() {
        let yaml = r#"
- list_types: [AST_DAILY_HEARING_LIST]
  heading_key: heading
"#;
        let recipes = Recipe::list_from_yaml_str(yaml).unwrap();
        let recipe = &recipes[0];
        assert!(recipe.date_line.is_none());
        assert!(recipe.last_updated.is_none());
        assert!(recipe.paragraphs.is_empty());
        assert!(recipe.panels.is_empty());
        assert!(recipe.tables.is_empty());
    }

    #[test]
    fn test_header_column_arity_mismatch_rejected() {
        let yaml = r#"
- list_types: [CST_WEEKLY_HEARING_LIST]
  heading_key: heading
  tables:
    - id: hearing-table
      path: hearings
      columns: [appellant, hearingTime]
      header_keys: [tableHeaders.appellant]
"#;
        match Recipe::list_from_yaml_str(yaml) {
            Err(ConvertError::RecipeError(msg)) => {
                assert!(msg.contains("1 header keys for 2 columns"), "{msg}");
            }
            other => panic!("expected RecipeError, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_region_id_rejected() {
        let yaml = r#"
- list_types: [CST_WEEKLY_HEARING_LIST]
  heading_key: heading
  paragraphs:
    - id: open-justice
      key: a
    - id: open-justice
      key: b
"#;
        assert!(matches!(
            Recipe::list_from_yaml_str(yaml),
            Err(ConvertError::RecipeError(_))
        ));
    }

    #[test]
    fn test_empty_list_types_rejected() {
        let yaml = r#"
- list_types: []
  heading_key: heading
"#;
        assert!(matches!(
            Recipe::list_from_yaml_str(yaml),
            Err(ConvertError::RecipeError(_))
        ));
    }

    #[test]
    fn test_bundle_keys_collected() {
        let recipes = Recipe::list_from_yaml_str(WEEKLY_RECIPE_YAML).unwrap();
        let keys = recipes[0].bundle_keys();
        assert!(keys.contains(&"heading.{listType}"));
        assert!(keys.contains(&"openJustice"));
        assert!(keys.contains(&"importantInformation"));
        assert!(keys.contains(&"tableHeaders.hearingTime"));
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_repeat_spec_parsed() {
        let yaml = r#"
- list_types: [RPT_LONDON_WEEKLY_HEARING_LIST]
  heading_key: heading
  tables:
    - id: hearing-table
      path: hearings
      repeat:
        path: venues
        title: venueName
      columns: [hearingTime, caseReferenceNumber]
      header_keys: [tableHeaders.hearingTime, tableHeaders.caseReferenceNumber]
"#;
        let recipes = Recipe::list_from_yaml_str(yaml).unwrap();
        let repeat = recipes[0].tables[0].repeat.as_ref().unwrap();
        assert_eq!(repeat.path, "venues");
        assert_eq!(repeat.title.as_deref(), Some("venueName"));
    }
}
