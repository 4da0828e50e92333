//! CLI binary for validating recipe files and bundle coverage.
//!
//! Usage:
//!   validate <recipes1.yaml> [recipes2.yaml ...] [--bundle bundle.json ...]
//!
//! Each recipe file is checked in two steps: serde deserialization (type and
//! structure errors) and semantic validation (header/column arity, duplicate
//! identifiers). When bundle files are supplied, every bundle key referenced
//! by every recipe is additionally checked against each bundle, with
//! `{listType}` interpolated per variant.

use courtlist_engine::{LanguageBundle, Recipe};
use std::path::Path;
use std::process;

struct Args {
    recipe_files: Vec<String>,
    bundle_files: Vec<String>,
}

fn parse_args(raw: Vec<String>) -> Result<Args, String> {
    let mut recipe_files = Vec::new();
    let mut bundle_files = Vec::new();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--bundle" {
            match iter.next() {
                Some(path) => bundle_files.push(path),
                None => return Err("--bundle requires a file path".to_string()),
            }
        } else {
            recipe_files.push(arg);
        }
    }

    if recipe_files.is_empty() {
        return Err("no recipe files given".to_string());
    }
    Ok(Args {
        recipe_files,
        bundle_files,
    })
}

fn load_bundle(path: &str) -> Result<serde_json::Value, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| format!("parse {path}: {e}"))
}

/// Check every referenced bundle key for every list-type variant.
fn check_bundle_coverage(
    recipes: &[Recipe],
    bundle_name: &str,
    bundle: &serde_json::Value,
) -> Vec<String> {
    let mut problems = Vec::new();
    for recipe in recipes {
        for list_type in &recipe.list_types {
            let view = LanguageBundle::new(bundle, list_type);
            for key in recipe.bundle_keys() {
                if view.get(key).is_none() {
                    problems.push(format!(
                        "{bundle_name}: missing '{}' for {list_type}",
                        view.interpolate_key(key)
                    ));
                }
            }
        }
    }
    problems
}

fn main() {
    let args = match parse_args(std::env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Usage: validate <recipes.yaml> [...] [--bundle bundle.json ...]");
            eprintln!("error: {msg}");
            process::exit(2);
        }
    };

    let bundles: Vec<(String, serde_json::Value)> = match args
        .bundle_files
        .iter()
        .map(|path| load_bundle(path).map(|value| (path.clone(), value)))
        .collect()
    {
        Ok(bundles) => bundles,
        Err(msg) => {
            eprintln!("FATAL: {msg}");
            process::exit(2);
        }
    };

    let mut failed = false;

    for arg in &args.recipe_files {
        let path = Path::new(arg);

        // Step 1 + 2: serde deserialization and semantic validation
        let recipes = match Recipe::list_from_yaml_file(path) {
            Ok(recipes) => recipes,
            Err(e) => {
                eprintln!("FAIL: {}: {e}", path.display());
                failed = true;
                continue;
            }
        };

        // Step 3: bundle coverage, when bundles were supplied
        let mut problems = Vec::new();
        for (bundle_name, bundle) in &bundles {
            problems.extend(check_bundle_coverage(&recipes, bundle_name, bundle));
        }

        if problems.is_empty() {
            let variants: usize = recipes.iter().map(|r| r.list_types.len()).sum();
            eprintln!("OK: {} ({} list types)", path.display(), variants);
        } else {
            eprintln!("FAIL: {}: bundle coverage", path.display());
            for problem in &problems {
                eprintln!("  - {problem}");
            }
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}
