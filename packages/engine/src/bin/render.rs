//! CLI binary for rendering a list publication via stdin.
//!
//! Usage:
//!   echo '{"payload": {...}, "metadata": {...}, "bundle": {...}}' \
//!     | cargo run --bin render
//!
//! Input (JSON on stdin):
//!   - payload: Object — the list-type-specific input document
//!   - metadata: Object — flat string map (contentDate, provenance,
//!     language, listType, optionally lastReceivedDate)
//!   - bundle: Object — the parsed language bundle for the requested language
//!   - recipe_dir: Optional<String> — load recipes from a directory instead
//!     of the built-in registry
//!
//! Output (JSON on stdout):
//!   - html: Optional<String> — the rendered document
//!   - list_type: Optional<String> — the list type that was rendered
//!   - error: Optional<String> — error message if rendering failed

use courtlist_engine::{ListConverter, TemplateRegistry};
use std::collections::HashMap;
use std::io::Read;

#[derive(serde::Deserialize)]
struct RenderRequest {
    payload: serde_json::Value,
    metadata: HashMap<String, String>,
    bundle: serde_json::Value,
    #[serde(default)]
    recipe_dir: Option<String>,
}

#[derive(serde::Serialize)]
struct RenderResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> RenderResponse {
    RenderResponse {
        html: None,
        list_type: None,
        error: Some(msg),
    }
}

fn emit(response: &RenderResponse) {
    println!("{}", serde_json::to_string(response).unwrap_or_default());
}

fn main() {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        emit(&error_response(format!("Failed to read stdin: {e}")));
        std::process::exit(1);
    }

    let request: RenderRequest = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => {
            emit(&error_response(format!("Failed to parse request JSON: {e}")));
            std::process::exit(1);
        }
    };

    let converter = match &request.recipe_dir {
        Some(dir) => match TemplateRegistry::from_dir(dir) {
            Ok(registry) => ListConverter::new(registry),
            Err(e) => {
                emit(&error_response(format!("Failed to load recipe dir: {e}")));
                std::process::exit(1);
            }
        },
        None => match ListConverter::with_builtin() {
            Ok(converter) => converter,
            Err(e) => {
                emit(&error_response(format!("Failed to load built-in recipes: {e}")));
                std::process::exit(1);
            }
        },
    };

    match converter.convert(&request.payload, &request.metadata, &request.bundle) {
        Ok(html) => {
            emit(&RenderResponse {
                html: Some(html),
                list_type: request.metadata.get("listType").cloned(),
                error: None,
            });
        }
        Err(e) => {
            emit(&error_response(format!("{e}")));
            std::process::exit(1);
        }
    }
}
