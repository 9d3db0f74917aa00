//! End-to-end CLI tests using assert_cmd

mod common;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::prelude::*;

fn msync() -> Command {
    let mut cmd = Command::cargo_bin("msync").expect("binary builds");
    cmd.env_remove("MSYNC_WORKSPACE");
    cmd
}

#[test]
fn test_help_lists_commands() {
    msync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ls"))
        .stdout(predicate::str::contains("bump"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    msync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("msync"));
}

#[test]
fn test_ls_shows_modules_and_dependants() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.2.3", &[]);
    ws.create_module("server", "2.0.0", &[("client", "1.2.3")]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client"))
        .stdout(predicate::str::contains("1.2.3"))
        .stdout(predicate::str::contains("server"))
        .stdout(predicate::str::contains("dependants:"));
}

#[test]
fn test_ls_without_settings_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    msync()
        .args(["-w", temp.path().to_str().unwrap(), "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings not found"));
}

#[test]
fn test_ls_empty_workspace() {
    let ws = TestWorkspace::new();

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules found."));
}

#[test]
fn test_bump_dry_run_leaves_manifests_untouched() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "minor", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("dependants: server"))
        .stdout(predicate::str::contains("1.1.0"))
        .stdout(predicate::str::contains("No files were saved."));

    assert_eq!(ws.read_manifest("client")["version"], "1.0.0");
    assert_eq!(ws.read_manifest("server")["dependencies"]["client"], "1.0.0");
}

#[test]
fn test_bump_persists_cascade() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "major"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MAJOR"))
        .stdout(predicate::str::contains("Dependant modules:"));

    assert_eq!(ws.read_manifest("client")["version"], "2.0.0");
    let server = ws.read_manifest("server");
    assert_eq!(server["version"], "1.0.1");
    assert_eq!(server["dependencies"]["client"], "2.0.0");
}

#[test]
fn test_bump_skips_ignored_dependant() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);
    ws.set_ignore(&["server"]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "minor"])
        .assert()
        .success();

    assert_eq!(ws.read_manifest("client")["version"], "1.1.0");
    // The ignored dependant was neither re-released nor re-referenced
    let server = ws.read_manifest("server");
    assert_eq!(server["version"], "1.0.0");
    assert_eq!(server["dependencies"]["client"], "1.0.0");
}

#[test]
fn test_bump_ignored_dependant_with_include_flag() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);
    ws.set_ignore(&["server"]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "minor", "-i"])
        .assert()
        .success();

    let server = ws.read_manifest("server");
    assert_eq!(server["version"], "1.0.1");
    assert_eq!(server["dependencies"]["client"], "1.1.0");
}

#[test]
fn test_bump_named_ignored_module_requires_include_flag() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.set_ignore(&["client"]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "patch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'client' is ignored"));

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "client", "-r", "patch", "-i"])
        .assert()
        .success();
    assert_eq!(ws.read_manifest("client")["version"], "1.0.1");
}

#[test]
fn test_bump_unknown_module_fails() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "missing", "-r", "patch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'missing' not found"));
}

#[test]
fn test_bump_cyclic_workspace_fails() {
    let ws = TestWorkspace::new();
    ws.create_module("a", "1.0.0", &[("b", "1.0.0")]);
    ws.create_module("b", "1.0.0", &[("a", "1.0.0")]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "bump", "a", "-r", "patch", "-d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency"))
        .stderr(predicate::str::contains("a -> b -> a"));
}

#[test]
fn test_sync_without_dependants() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "sync", "client", "--native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules depend on client."));
}

#[test]
fn test_sync_skips_ignored_dependant() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);
    ws.set_ignore(&["server"]);
    ws.write_file("libs/client/index.js", "module.exports = {};\n");

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "sync", "client", "--native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules depend on client."));

    assert!(!ws.file_exists("libs/server/node_modules/client/index.js"));
}

#[test]
fn test_sync_mirrors_into_dependants() {
    let ws = TestWorkspace::new();
    ws.create_module("client", "1.0.0", &[]);
    ws.create_module("server", "1.0.0", &[("client", "1.0.0")]);
    ws.write_file("libs/client/index.js", "module.exports = {};\n");

    msync()
        .args(["-w", ws.path.to_str().unwrap(), "sync", "client", "--native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server"));

    assert!(ws.file_exists("libs/server/node_modules/client/index.js"));
}

#[test]
fn test_completions_bash() {
    msync()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msync"));
}

#[test]
fn test_completions_unknown_shell() {
    msync()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
