use anyhow::{Context, Result};
use std::path::Path;

use shipdesk::product::{FieldUpdate, FormState};

pub mod orders;
pub mod submit;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

pub async fn show_how_to_get_started() -> Result<()> {
    println!("📦 shipdesk - Product Entry & Open Orders");
    println!();
    println!("Browse orders:");
    println!("  📋 shipdesk orders                        # All open orders as cards");
    println!("  🔍 shipdesk orders --search laptop        # Search number, product, customer");
    println!("  🗂️  shipdesk orders --view kanban          # card, table, kanban, timeline");
    println!("  ✏️  shipdesk set-status 3 delivered        # Change one order's status");
    println!();
    println!("Enter products:");
    println!("  ✅ shipdesk validate --file product.toml  # Check a product without saving");
    println!("  🚀 shipdesk submit --set name=Lamp ...    # Submit a product");
    println!();
    println!("💡 Start with 'shipdesk orders' to see what is in flight!");
    Ok(())
}

/// Flatten a TOML document into dotted `path=value` pairs.
fn flatten_toml(prefix: &str, value: &toml::Value, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, nested) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_toml(&path, nested, out);
            }
        }
        toml::Value::String(text) => out.push((prefix.to_string(), text.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

/// Record keys a product file may carry that the form never edits.
const IGNORED_KEYS: [&str; 2] = ["images", "specifications"];

/// Parse a product TOML document into field updates.
///
/// `images` and `specifications` are accepted and skipped.
pub fn updates_from_toml(contents: &str) -> Result<Vec<FieldUpdate>> {
    let mut document: toml::Value = toml::from_str(contents).context("Product file is not valid TOML")?;
    if let toml::Value::Table(table) = &mut document {
        for key in IGNORED_KEYS {
            if table.remove(key).is_some() {
                tracing::debug!(key, "Skipping product file key the form does not edit");
            }
        }
    }

    let mut pairs = Vec::new();
    flatten_toml("", &document, &mut pairs);

    pairs
        .into_iter()
        .map(|(path, value)| FieldUpdate::from_path(&path, value).map_err(Into::into))
        .collect()
}

/// Build a form from an optional product file followed by `--set` assignments.
pub fn build_form(file: Option<&Path>, assignments: &[String]) -> Result<FormState> {
    let mut updates = Vec::new();

    if let Some(path) = file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product file {}", path.display()))?;
        updates.extend(updates_from_toml(&contents)?);
    }

    for assignment in assignments {
        updates.push(FieldUpdate::parse_assignment(assignment)?);
    }

    let mut form = FormState::new();
    for update in updates {
        form.update_field(update);
    }
    Ok(form)
}
