//! Basic CLI tests for dirmap
//!
//! The binary takes no flags or arguments; the traversal root is always
//! the process working directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dirmap() -> Command {
    Command::cargo_bin("dirmap").unwrap()
}

// =============================================================================
// Success Path (Exit Code 0)
// =============================================================================

#[test]
fn empty_directory_prints_empty_object() {
    let temp = TempDir::new().unwrap();

    dirmap()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn tree_output_is_indented_json() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.py"), "").unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/main.py"), "").unwrap();

    let output = dirmap()
        .current_dir(temp.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["a.py"], "file");
    assert_eq!(value["src"]["main.py"], "file");

    // 4-space indentation
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\n    \"a.py\""));
}

#[test]
fn ignored_directories_absent_from_output() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".git")).unwrap();
    fs::write(temp.path().join(".git/HEAD"), "").unwrap();
    fs::create_dir(temp.path().join("node_modules")).unwrap();
    fs::write(temp.path().join("kept.txt"), "").unwrap();

    dirmap()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("kept.txt"))
        .stdout(predicate::str::contains(".git").not())
        .stdout(predicate::str::contains("node_modules").not());
}

#[test]
fn arguments_are_ignored_and_root_stays_cwd() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("only.txt"), "").unwrap();

    dirmap()
        .current_dir(temp.path())
        .arg("/somewhere/else")
        .assert()
        .success()
        .stdout(predicate::str::contains("only.txt"));
}

// =============================================================================
// Error Path (Exit Code 2)
// =============================================================================

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_returns_exit_code_2() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read_dir(&locked).is_ok() {
        // Running as root; permissions are not enforced
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = dirmap().current_dir(temp.path()).assert();

    // Restore so TempDir can clean up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("locked"));
}
