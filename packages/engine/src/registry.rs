//! Template registry
//!
//! Maps a list-type key to its rendering recipe. The registry is read-only
//! after construction; the built-in registry parses the recipe definitions
//! embedded in the crate once per process and is safe to share across
//! threads.

use crate::config;
use crate::error::{ConvertError, Result};
use crate::recipe::Recipe;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Recipe definitions compiled into the crate.
///
/// Each file describes one family of list types; adding a list type is an
/// edit here (or a file in a `from_dir` directory), never new code.
const EMBEDDED_RECIPES: &[(&str, &str)] = &[
    (
        "weekly_tribunals.yaml",
        include_str!("../recipes/weekly_tribunals.yaml"),
    ),
    (
        "ut_iac_jr_daily.yaml",
        include_str!("../recipes/ut_iac_jr_daily.yaml"),
    ),
    (
        "security_tribunals.yaml",
        include_str!("../recipes/security_tribunals.yaml"),
    ),
    (
        "rpt_regional_weekly.yaml",
        include_str!("../recipes/rpt_regional_weekly.yaml"),
    ),
    ("ut_daily.yaml", include_str!("../recipes/ut_daily.yaml")),
];

static BUILTIN: OnceLock<std::result::Result<TemplateRegistry, String>> = OnceLock::new();

/// Read-mostly map from list-type key to recipe.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    recipes: HashMap<String, Arc<Recipe>>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the recipe definitions embedded in the crate.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for (name, content) in EMBEDDED_RECIPES {
            registry.add_recipes_from_str(content).map_err(|e| {
                ConvertError::RecipeError(format!("embedded recipe file {name}: {e}"))
            })?;
        }
        tracing::debug!(list_types = registry.len(), "Built-in registry loaded");
        Ok(registry)
    }

    /// The process-wide built-in registry, parsed on first use.
    pub fn shared() -> Result<&'static TemplateRegistry> {
        let init = BUILTIN.get_or_init(|| Self::builtin().map_err(|e| e.to_string()));
        match init {
            Ok(registry) => Ok(registry),
            Err(msg) => Err(ConvertError::RecipeError(msg.clone())),
        }
    }

    /// Build a registry from every `.yaml`/`.yml` file in a directory.
    ///
    /// Files are loaded in name order; non-YAML entries are skipped with a
    /// warning. Intended for deployments that patch recipes without
    /// rebuilding the engine.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir_ref = dir.as_ref();
        let mut paths: Vec<_> = fs::read_dir(dir_ref)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            let is_yaml = path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !path.is_file() || !is_yaml {
                tracing::warn!(path = %path.display(), "Skipping non-recipe file");
                continue;
            }
            for recipe in Recipe::list_from_yaml_file(&path)? {
                registry.add_recipe(recipe)?;
            }
        }

        tracing::debug!(
            dir = %dir_ref.display(),
            list_types = registry.len(),
            "Recipe directory loaded"
        );
        Ok(registry)
    }

    /// Parse a YAML recipe list and register every entry.
    pub fn add_recipes_from_str(&mut self, content: &str) -> Result<usize> {
        let recipes = Recipe::list_from_yaml_str(content)?;
        let count = recipes.len();
        for recipe in recipes {
            self.add_recipe(recipe)?;
        }
        Ok(count)
    }

    /// Register a validated recipe under each of its list-type keys.
    ///
    /// # Errors
    /// `ConvertError::RecipeError` on a duplicate list-type key or when the
    /// registry would exceed `MAX_LOADED_RECIPES` entries.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate()?;

        if self.recipes.len() + recipe.list_types.len() > config::MAX_LOADED_RECIPES {
            return Err(ConvertError::RecipeError(format!(
                "Registry exceeds maximum of {} list types",
                config::MAX_LOADED_RECIPES
            )));
        }

        let shared = Arc::new(recipe);
        for list_type in &shared.list_types {
            if self.recipes.contains_key(list_type) {
                return Err(ConvertError::RecipeError(format!(
                    "Duplicate recipe for list type '{list_type}'"
                )));
            }
            self.recipes.insert(list_type.clone(), Arc::clone(&shared));
        }
        Ok(())
    }

    /// Look up the recipe for a list type (case-sensitive).
    ///
    /// # Errors
    /// `ConvertError::UnknownListType` - the key has no registered recipe.
    pub fn get(&self, list_type: &str) -> Result<&Recipe> {
        self.recipes
            .get(list_type)
            .map(Arc::as_ref)
            .ok_or_else(|| ConvertError::UnknownListType(list_type.to_string()))
    }

    /// All registered list-type keys, sorted.
    pub fn list_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Number of registered list-type keys.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the registry has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
