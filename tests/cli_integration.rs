// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Lookout contributors
//! Integration tests for the lookout CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run lookout with the given arguments and data directory
fn lookout(data_dir: &TempDir, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lookout").expect("binary should build");
    cmd.env("LOOKOUT_DATA_DIR", data_dir.path())
        .env("NO_COLOR", "1")
        .args(args);
    cmd
}

/// A small catalogue: app depends on lib, lib@1.0 has a critical issue,
/// util is clean
fn seed_catalog(data_dir: &TempDir) {
    let catalog_json = r#"{
        "components": [
            {
                "name": "app",
                "description": "The application",
                "most_recent_version": "2.0"
            },
            {
                "name": "lib",
                "description": "A shared library",
                "most_recent_version": "1.0"
            },
            {
                "name": "util",
                "description": null,
                "most_recent_version": "3.1"
            }
        ],
        "versions": [
            {
                "component": "lib",
                "version": "1.0",
                "active": true,
                "resolved_dependencies": [],
                "requested_dependencies": []
            },
            {
                "component": "util",
                "version": "3.1",
                "active": true,
                "resolved_dependencies": [],
                "requested_dependencies": []
            },
            {
                "component": "app",
                "version": "2.0",
                "active": true,
                "resolved_dependencies": [
                    { "component": "lib", "version": "1.0" },
                    { "component": "util", "version": "3.1" }
                ],
                "requested_dependencies": [
                    { "component": "lib", "version": "1.0" }
                ]
            }
        ],
        "issues": [
            {
                "id": "LIB-7",
                "component": "lib",
                "affects_version": "1.0",
                "fix_version": "1.1",
                "level": "CRITICAL",
                "message": "Deserializer panics on empty input",
                "recorded_at": "2026-01-05T12:00:00Z"
            }
        ]
    }"#;

    std::fs::write(data_dir.path().join("catalog.json"), catalog_json).unwrap();
}

#[test]
fn test_components_lists_catalogue() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Components (3):"))
        .stdout(predicate::str::contains("app [2.0]"))
        .stdout(predicate::str::contains("lib [1.0]"))
        .stdout(predicate::str::contains("Displaying 1 to 3 of 3"))
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn test_components_empty_catalogue() {
    let data_dir = TempDir::new().unwrap();

    lookout(&data_dir, &["components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components in the catalogue"));
}

#[test]
fn test_components_pagination_windows() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["components", "--per-page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Displaying 1 to 2 of 3"))
        .stdout(predicate::str::contains("Page 1 of 2"))
        .stdout(predicate::str::contains("util").not());

    lookout(&data_dir, &["components", "--per-page", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Displaying 3 to 3 of 3"))
        .stdout(predicate::str::contains("Page 2 of 2"))
        .stdout(predicate::str::contains("util"));

    // Out-of-range pages clamp to the last page
    lookout(&data_dir, &["components", "--per-page", "2", "--page", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"));
}

#[test]
fn test_component_shows_versions() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["component", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The application"))
        .stdout(predicate::str::contains("Versions (1):"))
        .stdout(predicate::str::contains("2.0 [active]"))
        .stdout(predicate::str::contains("1 indirect issue(s)"));
}

#[test]
fn test_component_unknown_fails() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["component", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Component not found: ghost"));
}

#[test]
fn test_version_detail_orders_dependencies_by_priority() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    let assert = lookout(&data_dir, &["version", "app", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app@2.0 [active]"))
        .stdout(predicate::str::contains("Indirect issues (1):"))
        .stdout(predicate::str::contains("LIB-7"));

    // lib carries the issue, so it outranks util despite sorting after it
    // alphabetically
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let resolved = stdout
        .find("Resolved dependencies")
        .expect("resolved section in output");
    let section = &stdout[resolved..];
    let lib_pos = section.find("lib@1.0").expect("lib in resolved section");
    let util_pos = section.find("util@3.1").expect("util in resolved section");
    assert!(lib_pos < util_pos, "issue-laden dependency should come first");
}

#[test]
fn test_issue_lifecycle() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    // List shows the seeded issue
    lookout(&data_dir, &["issue", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues (1):"))
        .stdout(predicate::str::contains("LIB-7"));

    // Add a new issue
    lookout(
        &data_dir,
        &[
            "issue", "add",
            "--id", "APP-1",
            "--component", "app",
            "--affects", "2.0",
            "--level", "major",
            "--message", "Startup takes forever",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Recorded issue APP-1"));

    // Duplicate ids are rejected
    lookout(
        &data_dir,
        &[
            "issue", "add",
            "--id", "APP-1",
            "--component", "app",
            "--affects", "2.0",
            "--message", "again",
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

    // Show it
    lookout(&data_dir, &["issue", "show", "--id", "APP-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MAJOR"))
        .stdout(predicate::str::contains("Startup takes forever"));

    // Update it
    lookout(
        &data_dir,
        &["issue", "update", "--id", "APP-1", "--level", "critical", "--fix", "2.1"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated issue APP-1"));

    lookout(&data_dir, &["issue", "show", "--id", "APP-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL"))
        .stdout(predicate::str::contains("fixed in: 2.1"));

    // The new issue now shows up as a direct issue on the version
    lookout(&data_dir, &["version", "app", "2.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Direct issues (1):"));
}

#[test]
fn test_issue_unknown_action_fails() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["issue", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action: frobnicate"));
}

#[test]
fn test_import_merges_into_catalogue() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    let extra = r#"{
        "components": [],
        "versions": [
            {
                "component": "newcomer",
                "version": "0.1",
                "active": true,
                "resolved_dependencies": [],
                "requested_dependencies": []
            }
        ],
        "issues": []
    }"#;
    let extra_path = data_dir.path().join("extra.json");
    std::fs::write(&extra_path, extra).unwrap();

    lookout(&data_dir, &["import", extra_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 component(s), 1 version(s), 0 issue(s)"));

    lookout(&data_dir, &["components"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Components (4):"))
        .stdout(predicate::str::contains("newcomer"));
}

#[test]
fn test_export_formats() {
    let data_dir = TempDir::new().unwrap();
    seed_catalog(&data_dir);

    lookout(&data_dir, &["export", "--format", "dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph catalogue"))
        .stdout(predicate::str::contains("\"app@2.0\" -> \"lib@1.0\""));

    lookout(&data_dir, &["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"components\""))
        .stdout(predicate::str::contains("LIB-7"));

    lookout(&data_dir, &["export", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_config_prints_data_dir() {
    let data_dir = TempDir::new().unwrap();

    lookout(&data_dir, &["config", "data-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            data_dir.path().to_string_lossy().to_string(),
        ));
}
