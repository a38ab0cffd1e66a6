// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Component command - one component and a paged list of its versions

use crate::catalog::ComponentCatalog;
use crate::pager::Pager;
use crate::types::{VersionId, VersionRecord};
use anyhow::{Context, Result};

/// Run the component command
pub fn run(name: &str, page: usize, per_page: usize) -> Result<()> {
    let data_dir = super::data_dir()?;
    let catalog = ComponentCatalog::load(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    let component = catalog
        .get_component(name)
        .ok_or_else(|| anyhow::anyhow!("Component not found: {name}"))?;

    println!("{}", component.name);
    if let Some(description) = &component.description {
        println!("  {description}");
    }
    if let Some(recent) = &component.most_recent_version {
        println!("  most recent version: {recent}");
    }
    println!();

    let versions: Vec<VersionRecord> = catalog
        .versions_of(name)
        .into_iter()
        .cloned()
        .collect();

    if versions.is_empty() {
        println!("No versions recorded.");
        return Ok(());
    }

    let mut pager = Pager::new().with_key_fn(VersionRecord::key);
    pager.set_page_size(per_page);
    pager.replace_items(versions);
    pager.set_page(page);

    println!("Versions ({}):", pager.len());

    for record in pager.page_items() {
        let id = VersionId::new(record.component.clone(), record.version.clone());
        let direct = catalog.direct_issues(&id).len();
        let indirect = catalog.indirect_issues(&id).len();
        let activity = if record.active { "active" } else { "inactive" };

        let mut line = format!("  {} [{activity}]", record.version);
        if direct > 0 {
            line.push_str(&format!("  {direct} direct issue(s)"));
        }
        if indirect > 0 {
            line.push_str(&format!("  {indirect} indirect issue(s)"));
        }
        println!("{line}");
    }

    super::print_paging_footer(&pager);

    Ok(())
}
