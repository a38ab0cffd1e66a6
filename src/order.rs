// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Display ordering for dependency lists
//!
//! Dependencies carrying issues are the actionable ones, so they float to
//! the top: versions with their own issues first, then versions that only
//! inherit issues from further down the graph, then the clean rest. Within
//! a tier, entries are ordered by component name.

use crate::types::Dependency;
use std::cmp::Ordering;

/// Precedence tier of a dependency: 2 = has direct issues, 1 = has indirect
/// issues only, 0 = clean
#[must_use]
pub fn dependency_priority(dep: &Dependency) -> u8 {
    if !dep.version.direct_issues.is_empty() {
        return 2;
    }
    if !dep.version.indirect_issues.is_empty() {
        return 1;
    }
    0
}

/// Compare two dependencies for display: descending by priority, then
/// case-insensitive ascending by component name
#[must_use]
pub fn compare_dependencies(a: &Dependency, b: &Dependency) -> Ordering {
    dependency_priority(b)
        .cmp(&dependency_priority(a))
        .then_with(|| {
            // Lowercased comparison rather than byte order, so "Zeta" does
            // not sort before "alpha"
            a.version
                .component
                .to_lowercase()
                .cmp(&b.version.component.to_lowercase())
        })
}

/// Sort a dependency list for display
///
/// `None` (absent upstream data) degrades to an empty list rather than
/// failing. The sort is stable, so true duplicates keep their relative
/// order.
#[must_use]
pub fn sort_dependencies(deps: Option<Vec<Dependency>>) -> Vec<Dependency> {
    let Some(mut deps) = deps else {
        return Vec::new();
    };
    deps.sort_by(compare_dependencies);
    deps
}
