// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Issue management commands - record, list, show, and update issues

use crate::catalog::ComponentCatalog;
use crate::types::{Issue, IssueLevel};
use anyhow::{Context, Result};
use chrono::Utc;
use std::cmp::Reverse;

/// Run the issue command
#[allow(clippy::too_many_arguments)]
pub fn run(
    action: &str,
    id: Option<String>,
    component: Option<String>,
    affects: Option<String>,
    fix: Option<String>,
    level: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let data_dir = super::data_dir()?;
    let mut catalog = ComponentCatalog::load(&data_dir)
        .with_context(|| format!("Failed to load catalogue from {}", data_dir.display()))?;

    match action {
        "add" | "create" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("--id is required"))?;
            let component = component.ok_or_else(|| anyhow::anyhow!("--component is required"))?;
            let affects = affects.ok_or_else(|| anyhow::anyhow!("--affects is required"))?;
            let message = message.ok_or_else(|| anyhow::anyhow!("--message is required"))?;
            let level = parse_level(level.as_deref().unwrap_or("minor"))?;

            if catalog.get_issue(&id).is_some() {
                anyhow::bail!("Issue already exists: {id}. Use 'lookout issue update'.");
            }

            let issue = Issue {
                id: id.clone(),
                component: component.clone(),
                affects_version: affects.clone(),
                fix_version: fix,
                level,
                message,
                recorded_at: Utc::now(),
            };

            catalog.record_issue(issue);
            catalog.save(&data_dir)?;

            println!("Recorded issue {id} against {component}@{affects}");
            println!("  level: {level}");
        }

        "update" | "edit" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("--id is required"))?;
            let mut issue = catalog
                .get_issue(&id)
                .ok_or_else(|| anyhow::anyhow!("Issue not found: {id}"))?
                .clone();

            if let Some(level) = level {
                issue.level = parse_level(&level)?;
            }
            if let Some(message) = message {
                issue.message = message;
            }
            if let Some(fix) = fix {
                issue.fix_version = Some(fix);
            }

            catalog.update_issue(issue)?;
            catalog.save(&data_dir)?;

            println!("Updated issue {id}");
        }

        "show" | "get" => {
            let id = id.ok_or_else(|| anyhow::anyhow!("--id is required"))?;
            let issue = catalog
                .get_issue(&id)
                .ok_or_else(|| anyhow::anyhow!("Issue not found: {id}"))?;

            print_issue(issue);
        }

        "list" | "ls" => {
            if catalog.issues().is_empty() {
                println!("No issues recorded. Use 'lookout issue add' to create one.");
                return Ok(());
            }

            let mut issues: Vec<&Issue> = catalog.issues().iter().collect();
            issues.sort_by_key(|i| (Reverse(i.level), i.id.clone()));

            println!("Issues ({}):", issues.len());
            for issue in issues {
                println!(
                    "  [{}] {} {}@{}: {}",
                    super::level_badge(issue.level),
                    issue.id,
                    issue.component,
                    issue.affects_version,
                    issue.message
                );
            }
        }

        other => {
            anyhow::bail!("Unknown action: {other}. Valid: add, update, show, list");
        }
    }

    Ok(())
}

fn parse_level(s: &str) -> Result<IssueLevel> {
    IssueLevel::parse(s).ok_or_else(|| {
        anyhow::anyhow!("Unknown level: {s}. Valid: deprecation, minor, major, critical")
    })
}

fn print_issue(issue: &Issue) {
    println!("{}", issue.id);
    println!("  level: {}", super::level_badge(issue.level));
    println!("  affects: {}@{}", issue.component, issue.affects_version);
    match &issue.fix_version {
        Some(fix) => println!("  fixed in: {fix}"),
        None => println!("  fixed in: (no fix version)"),
    }
    println!("  recorded: {}", issue.recorded_at.to_rfc3339());
    println!("  {}", issue.message);
}
