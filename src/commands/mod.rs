// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//
//! Command implementations

pub mod component;
pub mod components;
pub mod config;
pub mod export;
pub mod import;
pub mod issue;
pub mod version;

use crate::pager::Pager;
use crate::types::IssueLevel;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Get the data directory for the catalogue
pub fn data_dir() -> Result<PathBuf> {
    // Check environment variable first
    if let Ok(dir) = std::env::var("LOOKOUT_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    // Use XDG data directory or fallback
    let data_dir = directories::ProjectDirs::from("org", "lookout", "lookout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".lookout")
        });

    Ok(data_dir)
}

/// Severity badge, coloured by level
pub(crate) fn level_badge(level: IssueLevel) -> String {
    match level {
        IssueLevel::Critical => level.code().red().bold().to_string(),
        IssueLevel::Major => level.code().yellow().to_string(),
        IssueLevel::Minor => level.code().cyan().to_string(),
        IssueLevel::Deprecation => level.code().dimmed().to_string(),
    }
}

/// Print the pagination footer under a paged list
pub(crate) fn print_paging_footer<T>(pager: &Pager<T>) {
    println!();
    println!(
        "Displaying {} to {} of {}",
        pager.page_start(),
        pager.page_end(),
        pager.len()
    );
    println!("Page {} of {}", pager.page(), pager.num_pages());
}
