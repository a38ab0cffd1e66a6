// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Config command - inspect resolved configuration values

use anyhow::Result;

/// Run the config command
pub fn run(key: &str, value: Option<String>) -> Result<()> {
    if value.is_some() {
        anyhow::bail!(
            "Configuration is resolved from the environment; set LOOKOUT_DATA_DIR or RUST_LOG instead"
        );
    }

    let config = crate::config::load()?;

    match key {
        "data-dir" | "data_dir" => {
            println!("{}", super::data_dir()?.display());
        }
        "log-level" | "log_level" => {
            println!("{}", config.log_level);
        }
        "all" => {
            println!("data-dir = {}", super::data_dir()?.display());
            println!("log-level = {}", config.log_level);
        }
        other => {
            anyhow::bail!("Unknown config key: {other}. Valid: data-dir, log-level, all");
        }
    }

    Ok(())
}
