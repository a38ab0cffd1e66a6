// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Version command - detail view of one version with its dependencies
//! ordered by issue priority

use crate::catalog::ComponentCatalog;
use crate::order::sort_dependencies;
use crate::types::{Dependency, Issue};
use anyhow::{Context, Result};

/// Run the version command
pub fn run(component: &str, version: &str) -> Result<()> {
    let data_dir = super::data_dir()?;
    let catalog = ComponentCatalog::load(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    let view = catalog
        .version_view(component, version)
        .with_context(|| format!("Failed to assemble view for {component}@{version}"))?;

    let activity = if view.active { "active" } else { "inactive" };
    println!("{}@{} [{activity}]", view.component, view.version);

    print_issue_section("Direct issues", &view.direct_issues);
    print_issue_section("Indirect issues", &view.indirect_issues);

    print_dependency_section(
        "Resolved dependencies",
        sort_dependencies(Some(view.resolved_dependencies)),
    );
    print_dependency_section(
        "Requested dependencies",
        sort_dependencies(Some(view.requested_dependencies)),
    );

    Ok(())
}

fn print_issue_section(title: &str, issues: &[Issue]) {
    println!();
    if issues.is_empty() {
        println!("{title}: none");
        return;
    }

    println!("{title} ({}):", issues.len());
    for issue in issues {
        println!(
            "  [{}] {} ({}@{}): {}",
            super::level_badge(issue.level),
            issue.id,
            issue.component,
            issue.affects_version,
            issue.message
        );
        if let Some(fix) = &issue.fix_version {
            println!("    fixed in {fix}");
        }
    }
}

fn print_dependency_section(title: &str, deps: Vec<Dependency>) {
    println!();
    if deps.is_empty() {
        println!("{title}: none");
        return;
    }

    println!("{title} ({}):", deps.len());
    for dep in &deps {
        let marker = if !dep.version.direct_issues.is_empty() {
            "!"
        } else if !dep.version.indirect_issues.is_empty() {
            "~"
        } else {
            " "
        };
        println!(
            "  {marker} {}@{} ({} direct, {} indirect)",
            dep.version.component,
            dep.version.version,
            dep.version.direct_issues.len(),
            dep.version.indirect_issues.len()
        );
    }
}
