// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//
//! Lookout library - watchtower for your component ecosystem
//!
//! This crate provides the core functionality for browsing a catalogue of
//! software components, their versions, the dependency graph between
//! versions, and the issues recorded against them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod commands;
pub mod config;
pub mod order;
pub mod pager;

/// Core data types for the component catalogue
pub mod types {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use std::fmt;

    // =========================================================================
    // Issues
    // =========================================================================

    /// Severity of an issue, from mildest to most severe
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(rename_all = "UPPERCASE")]
    pub enum IssueLevel {
        /// The version still works but should be migrated away from
        Deprecation,
        /// Minor defect, workarounds exist
        Minor,
        /// Major defect, upgrade strongly recommended
        Major,
        /// Critical defect, do not ship
        Critical,
    }

    impl IssueLevel {
        /// Parse a level from a string (case-insensitive)
        #[must_use]
        pub fn parse(s: &str) -> Option<Self> {
            match s.to_lowercase().as_str() {
                "deprecation" => Some(Self::Deprecation),
                "minor" => Some(Self::Minor),
                "major" => Some(Self::Major),
                "critical" => Some(Self::Critical),
                _ => None,
            }
        }

        /// Get the canonical wire name for this level
        #[must_use]
        pub fn code(&self) -> &'static str {
            match self {
                Self::Deprecation => "DEPRECATION",
                Self::Minor => "MINOR",
                Self::Major => "MAJOR",
                Self::Critical => "CRITICAL",
            }
        }
    }

    impl fmt::Display for IssueLevel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.code())
        }
    }

    /// An issue recorded against a specific version of a component
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Issue {
        /// Unique identifier chosen by the reporter
        pub id: String,
        /// Component this issue belongs to
        pub component: String,
        /// Version the issue is recorded against
        pub affects_version: String,
        /// First version where the issue is fixed, if known
        pub fix_version: Option<String>,
        /// Severity level
        pub level: IssueLevel,
        /// Human-readable description
        pub message: String,
        /// When the issue was recorded
        pub recorded_at: DateTime<Utc>,
    }

    // =========================================================================
    // Components and Versions
    // =========================================================================

    /// A software component in the catalogue
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Component {
        /// Unique component name
        pub name: String,
        /// Description
        pub description: Option<String>,
        /// Most recently imported version, if any
        pub most_recent_version: Option<String>,
    }

    /// Identifies a single version of a single component
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct VersionId {
        /// Component name
        pub component: String,
        /// Version string
        pub version: String,
    }

    impl VersionId {
        /// Create a version ID from component and version strings
        #[must_use]
        pub fn new(component: impl Into<String>, version: impl Into<String>) -> Self {
            Self {
                component: component.into(),
                version: version.into(),
            }
        }

        /// Canonical node key: `<component>@<version>`
        #[must_use]
        pub fn key(&self) -> String {
            format!("{}@{}", self.component, self.version)
        }
    }

    impl fmt::Display for VersionId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}@{}", self.component, self.version)
        }
    }

    /// A concrete version of a component as stored in the catalogue
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct VersionRecord {
        /// Component name
        pub component: String,
        /// Version string
        pub version: String,
        /// Whether this version is still in active use
        pub active: bool,
        /// Versions this one resolved against at build time
        #[serde(default)]
        pub resolved_dependencies: Vec<VersionId>,
        /// Versions this one declared (pre-resolution)
        #[serde(default)]
        pub requested_dependencies: Vec<VersionId>,
    }

    impl VersionRecord {
        /// The identifier of this version
        #[must_use]
        pub fn id(&self) -> VersionId {
            VersionId::new(self.component.clone(), self.version.clone())
        }

        /// Canonical node key: `<component>@<version>`
        #[must_use]
        pub fn key(&self) -> String {
            format!("{}@{}", self.component, self.version)
        }
    }

    // =========================================================================
    // Assembled Views
    // =========================================================================

    /// A dependency's version, decorated with its issue load
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DependencyVersion {
        /// Component name of the dependency
        pub component: String,
        /// Version string of the dependency
        pub version: String,
        /// Issues recorded directly against this version
        #[serde(default)]
        pub direct_issues: Vec<Issue>,
        /// Issues inherited through this version's own dependencies
        #[serde(default)]
        pub indirect_issues: Vec<Issue>,
    }

    /// One entry in a version's dependency list
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Dependency {
        /// The depended-upon version
        pub version: DependencyVersion,
    }

    /// A fully assembled version, ready for display
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct VersionView {
        /// Component name
        pub component: String,
        /// Version string
        pub version: String,
        /// Whether this version is still in active use
        pub active: bool,
        /// Issues recorded directly against this version
        pub direct_issues: Vec<Issue>,
        /// Issues inherited through the resolved-dependency graph
        pub indirect_issues: Vec<Issue>,
        /// Resolved dependencies with their issue loads
        pub resolved_dependencies: Vec<Dependency>,
        /// Requested dependencies with their issue loads
        pub requested_dependencies: Vec<Dependency>,
    }

    // =========================================================================
    // Catalogue Store
    // =========================================================================

    /// The complete persisted catalogue
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CatalogStore {
        /// All components
        #[serde(default)]
        pub components: Vec<Component>,
        /// All version records
        #[serde(default)]
        pub versions: Vec<VersionRecord>,
        /// All issues
        #[serde(default)]
        pub issues: Vec<Issue>,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
