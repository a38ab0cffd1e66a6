// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//
//! Lookout CLI - watchtower for your component ecosystem

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lookout::commands;
use lookout::pager::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(name = "lookout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Data directory override
    #[arg(long, env = "LOOKOUT_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all components in the catalogue
    Components {
        /// Page to display (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,
    },

    /// Show one component and its versions
    Component {
        /// Component name
        name: String,

        /// Page of the version list to display (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Versions per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: usize,
    },

    /// Show a version with its issues and prioritised dependencies
    #[command(disable_version_flag = true)]
    Version {
        /// Component name
        component: String,

        /// Version string
        version: String,
    },

    /// Manage issues
    Issue {
        /// Action: add, update, show, list
        action: String,

        /// Issue identifier
        #[arg(long)]
        id: Option<String>,

        /// Component the issue is recorded against
        #[arg(long)]
        component: Option<String>,

        /// Affected version
        #[arg(long)]
        affects: Option<String>,

        /// Version where the issue is fixed
        #[arg(long)]
        fix: Option<String>,

        /// Severity: deprecation, minor, major, critical
        #[arg(long)]
        level: Option<String>,

        /// Issue description
        #[arg(long)]
        message: Option<String>,
    },

    /// Import a catalogue JSON file
    Import {
        /// File to import
        file: std::path::PathBuf,
    },

    /// Export the dependency graph to various formats
    Export {
        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Print resolved configuration values
    Config {
        /// Configuration key (data-dir, log-level, all)
        key: String,

        /// Value to set (unsupported; configuration is environment-driven)
        value: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Commands resolve the data dir through the environment
    if let Some(dir) = &cli.data_dir {
        std::env::set_var("LOOKOUT_DATA_DIR", dir);
    }

    // Execute command
    match cli.command {
        Commands::Components { page, per_page } => {
            commands::components::run(page, per_page)
        }
        Commands::Component { name, page, per_page } => {
            commands::component::run(&name, page, per_page)
        }
        Commands::Version { component, version } => {
            commands::version::run(&component, &version)
        }
        Commands::Issue { action, id, component, affects, fix, level, message } => {
            commands::issue::run(&action, id, component, affects, fix, level, message)
        }
        Commands::Import { file } => {
            commands::import::run(file)
        }
        Commands::Export { format, output } => {
            commands::export::run(&format, output)
        }
        Commands::Config { key, value } => {
            commands::config::run(&key, value)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "lookout", &mut std::io::stdout());
            Ok(())
        }
    }
}
