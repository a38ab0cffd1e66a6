// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! The component catalogue: persistence, dependency graph, issue queries

use crate::types::{
    CatalogStore, Component, Dependency, DependencyVersion, Issue, VersionId, VersionRecord,
    VersionView,
};
use anyhow::{Context, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Typed lookup failures against the catalogue
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No component with the given name
    #[error("component not found: {0}")]
    ComponentNotFound(String),
    /// No version record for the given component and version
    #[error("version not found: {component}@{version}")]
    VersionNotFound {
        /// Component name
        component: String,
        /// Version string
        version: String,
    },
    /// No issue with the given id
    #[error("issue not found: {0}")]
    IssueNotFound(String),
}

/// The component catalogue with petgraph backing for dependency traversal
pub struct ComponentCatalog {
    /// Resolved-dependency graph: one node per known version
    graph: DiGraph<VersionId, ()>,
    /// Map from version key to node index
    node_indices: HashMap<String, NodeIndex>,
    /// The persisted store (components, versions, issues)
    pub store: CatalogStore,
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentCatalog {
    /// Create a new empty catalogue
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            store: CatalogStore::default(),
        }
    }

    /// Load the catalogue from a directory containing catalog.json
    pub fn load(dir: &Path) -> Result<Self> {
        let catalog_path = dir.join("catalog.json");

        let store: CatalogStore = if catalog_path.exists() {
            let content = fs::read_to_string(&catalog_path)
                .with_context(|| format!("Failed to read {}", catalog_path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", catalog_path.display()))?
        } else {
            CatalogStore::default()
        };

        let mut catalog = Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            store,
        };

        catalog.rebuild_graph();

        Ok(catalog)
    }

    /// Save the catalogue to a directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;

        let catalog_path = dir.join("catalog.json");
        let catalog_json =
            serde_json::to_string_pretty(&self.store).context("Failed to serialize catalogue")?;
        fs::write(&catalog_path, catalog_json)
            .with_context(|| format!("Failed to write {}", catalog_path.display()))?;

        Ok(())
    }

    /// Rebuild the petgraph from the store
    ///
    /// Dependency edges pointing at versions not (yet) in the store are
    /// skipped; they appear once the target version is imported.
    fn rebuild_graph(&mut self) {
        self.graph.clear();
        self.node_indices.clear();

        for record in &self.store.versions {
            let idx = self.graph.add_node(record.id());
            self.node_indices.insert(record.key(), idx);
        }

        for record in &self.store.versions {
            let Some(&from_idx) = self.node_indices.get(&record.key()) else {
                continue;
            };
            for dep in &record.resolved_dependencies {
                if let Some(&to_idx) = self.node_indices.get(&dep.key()) {
                    self.graph.add_edge(from_idx, to_idx, ());
                }
            }
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add or update a component
    pub fn add_component(&mut self, component: Component) {
        if let Some(existing) = self
            .store
            .components
            .iter_mut()
            .find(|c| c.name == component.name)
        {
            *existing = component;
        } else {
            self.store.components.push(component);
        }
    }

    /// Add or update a version record
    ///
    /// Creates the owning component if it is not in the catalogue yet, and
    /// marks this version as the component's most recent one.
    pub fn add_version(&mut self, record: VersionRecord) {
        let component = record.component.clone();
        let version = record.version.clone();

        if let Some(existing) = self
            .store
            .versions
            .iter_mut()
            .find(|v| v.component == record.component && v.version == record.version)
        {
            *existing = record;
        } else {
            self.store.versions.push(record);
        }

        match self
            .store
            .components
            .iter_mut()
            .find(|c| c.name == component)
        {
            Some(c) => c.most_recent_version = Some(version),
            None => self.store.components.push(Component {
                name: component,
                description: None,
                most_recent_version: Some(version),
            }),
        }

        self.rebuild_graph();
    }

    /// Add or update an issue, keyed by its id
    pub fn record_issue(&mut self, issue: Issue) {
        if let Some(existing) = self.store.issues.iter_mut().find(|i| i.id == issue.id) {
            *existing = issue;
        } else {
            self.store.issues.push(issue);
        }
    }

    /// Replace an existing issue; fails when the id is unknown
    pub fn update_issue(&mut self, issue: Issue) -> Result<(), CatalogError> {
        match self.store.issues.iter_mut().find(|i| i.id == issue.id) {
            Some(existing) => {
                *existing = issue;
                Ok(())
            }
            None => Err(CatalogError::IssueNotFound(issue.id)),
        }
    }

    /// Merge another store into this catalogue, upserting every record
    pub fn merge(&mut self, store: CatalogStore) {
        for component in store.components {
            self.add_component(component);
        }
        // add_version rebuilds the graph itself; batch the rebuild instead
        for record in store.versions {
            if let Some(existing) = self
                .store
                .versions
                .iter_mut()
                .find(|v| v.component == record.component && v.version == record.version)
            {
                *existing = record;
            } else {
                self.store.versions.push(record);
            }
        }
        for issue in store.issues {
            self.record_issue(issue);
        }
        self.refresh_most_recent_versions();
        self.rebuild_graph();
    }

    fn refresh_most_recent_versions(&mut self) {
        let versions = self.store.versions.clone();
        for component in &mut self.store.components {
            if let Some(last) = versions.iter().rev().find(|v| v.component == component.name) {
                component.most_recent_version = Some(last.version.clone());
            }
        }
        // Version records whose component was never declared still surface
        for record in &versions {
            if !self
                .store
                .components
                .iter()
                .any(|c| c.name == record.component)
            {
                self.store.components.push(Component {
                    name: record.component.clone(),
                    description: None,
                    most_recent_version: Some(record.version.clone()),
                });
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a component by name
    #[must_use]
    pub fn get_component(&self, name: &str) -> Option<&Component> {
        self.store.components.iter().find(|c| c.name == name)
    }

    /// All components, in catalogue order
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.store.components
    }

    /// All version records of a component, in catalogue order
    #[must_use]
    pub fn versions_of(&self, component: &str) -> Vec<&VersionRecord> {
        self.store
            .versions
            .iter()
            .filter(|v| v.component == component)
            .collect()
    }

    /// Get a version record
    #[must_use]
    pub fn get_version(&self, component: &str, version: &str) -> Option<&VersionRecord> {
        self.store
            .versions
            .iter()
            .find(|v| v.component == component && v.version == version)
    }

    /// Get an issue by id
    #[must_use]
    pub fn get_issue(&self, id: &str) -> Option<&Issue> {
        self.store.issues.iter().find(|i| i.id == id)
    }

    /// All issues, in catalogue order
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.store.issues
    }

    /// Number of components
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.store.components.len()
    }

    /// Whether the catalogue has no components
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.components.is_empty()
    }

    /// Issues recorded directly against a version, most severe first
    ///
    /// Works for versions with no record in the catalogue too; issues are
    /// matched on (component, affected version) alone.
    #[must_use]
    pub fn direct_issues(&self, id: &VersionId) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .store
            .issues
            .iter()
            .filter(|i| i.component == id.component && i.affects_version == id.version)
            .cloned()
            .collect();
        sort_issues(&mut issues);
        issues
    }

    /// Issues inherited through the resolved-dependency graph, most severe
    /// first
    ///
    /// Walks every version reachable from this one (excluding itself) and
    /// collects their direct issues, deduplicated by issue id.
    #[must_use]
    pub fn indirect_issues(&self, id: &VersionId) -> Vec<Issue> {
        let Some(&start) = self.node_indices.get(&id.key()) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(node) = bfs.next(&self.graph) {
            if node == start {
                continue;
            }
            for issue in self.direct_issues(&self.graph[node]) {
                if seen.insert(issue.id.clone()) {
                    issues.push(issue);
                }
            }
        }
        sort_issues(&mut issues);
        issues
    }

    /// Decorate a dependency target with its issue load
    #[must_use]
    pub fn dependency_view(&self, id: &VersionId) -> Dependency {
        Dependency {
            version: DependencyVersion {
                component: id.component.clone(),
                version: id.version.clone(),
                direct_issues: self.direct_issues(id),
                indirect_issues: self.indirect_issues(id),
            },
        }
    }

    /// Assemble the full display view of a version
    pub fn version_view(&self, component: &str, version: &str) -> Result<VersionView, CatalogError> {
        let record =
            self.get_version(component, version)
                .ok_or_else(|| CatalogError::VersionNotFound {
                    component: component.to_string(),
                    version: version.to_string(),
                })?;

        let id = record.id();
        Ok(VersionView {
            component: record.component.clone(),
            version: record.version.clone(),
            active: record.active,
            direct_issues: self.direct_issues(&id),
            indirect_issues: self.indirect_issues(&id),
            resolved_dependencies: record
                .resolved_dependencies
                .iter()
                .map(|d| self.dependency_view(d))
                .collect(),
            requested_dependencies: record
                .requested_dependencies
                .iter()
                .map(|d| self.dependency_view(d))
                .collect(),
        })
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export the dependency graph to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph catalogue {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for record in &self.store.versions {
            let issues = self.direct_issues(&record.id()).len();
            let label = if issues > 0 {
                format!("{}\\n{} ({} issues)", record.component, record.version, issues)
            } else {
                format!("{}\\n{}", record.component, record.version)
            };
            dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", record.key(), label));
        }

        dot.push('\n');

        for record in &self.store.versions {
            for dep in &record.resolved_dependencies {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", record.key(), dep.key()));
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Export the store to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.store).context("Failed to serialize catalogue to JSON")
    }
}

/// Most severe first, then by id for deterministic output
fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| (Reverse(a.level), &a.id).cmp(&(Reverse(b.level), &b.id)));
}
