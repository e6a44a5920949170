use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::PersonaCatalog;

/// Load a custom persona catalog from a JSON file
///
/// The file holds the same shape as the built-in catalog: an object with a
/// `personas` array of {id, name, title, avatar?, instructions, expert?}.
pub fn load_catalog_file(path: &Path) -> Result<PersonaCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_catalog_json(&content)
}

/// Parse and validate a persona catalog from JSON
pub fn parse_catalog_json(json: &str) -> Result<PersonaCatalog> {
    let catalog: PersonaCatalog =
        serde_json::from_str(json).context("Failed to parse persona catalog JSON")?;

    if catalog.is_empty() {
        bail!("Persona catalog is empty");
    }

    let mut seen = HashSet::new();
    for persona in catalog.iter() {
        if persona.id.is_empty() {
            bail!("Persona with empty id in catalog");
        }
        if !seen.insert(persona.id.as_str()) {
            bail!("Duplicate persona id in catalog: {}", persona.id);
        }
    }

    Ok(catalog)
}
