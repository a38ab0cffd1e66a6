// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Import command - merges a catalogue JSON file into the data directory

use crate::catalog::ComponentCatalog;
use crate::types::CatalogStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Run the import command
pub fn run(file: PathBuf) -> Result<()> {
    info!("Importing: {:?}", file);

    let content = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let incoming: CatalogStore = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let data_dir = super::data_dir()?;
    let mut catalog = ComponentCatalog::load(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    let components = incoming.components.len();
    let versions = incoming.versions.len();
    let issues = incoming.issues.len();

    catalog.merge(incoming);
    catalog
        .save(&data_dir)
        .with_context(|| format!("Failed to save catalogue to {}", data_dir.display()))?;

    println!(
        "Imported {components} component(s), {versions} version(s), {issues} issue(s)"
    );
    println!("Catalogue saved to {}", data_dir.display());

    Ok(())
}
