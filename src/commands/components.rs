// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Components command - paged list of every component in the catalogue

use crate::catalog::ComponentCatalog;
use crate::pager::Pager;
use crate::types::Component;
use anyhow::{Context, Result};
use tracing::info;

/// Run the components command
pub fn run(page: usize, per_page: usize) -> Result<()> {
    let data_dir = super::data_dir()?;
    let catalog = ComponentCatalog::load(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    if catalog.is_empty() {
        println!("No components in the catalogue. Run 'lookout import' first.");
        return Ok(());
    }

    info!("Listing {} components", catalog.component_count());

    let mut pager = Pager::new().with_key_fn(|c: &Component| c.name.clone());
    pager.set_page_size(per_page);
    pager.replace_items(catalog.components().to_vec());
    pager.set_page(page);

    println!("Components ({}):", pager.len());
    println!();

    for component in pager.page_items() {
        let recent = component
            .most_recent_version
            .as_deref()
            .unwrap_or("no versions");
        println!("  {} [{}]", component.name, recent);
        if let Some(description) = &component.description {
            println!("    {description}");
        }
    }

    super::print_paging_footer(&pager);

    Ok(())
}
