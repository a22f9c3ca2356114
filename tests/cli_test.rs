//! Integration tests for the pyensure binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".pyensure");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yml"), config).unwrap();
    temp
}

fn pyensure(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("pyensure"));
    cmd.current_dir(project)
        .env_remove("PYENSURE_PYTHON")
        .env_remove("PYENSURE_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes an executable stand-in for the interpreter.
///
/// Probes (`-c <script> <name>`) succeed only for `present_pkg`. Installs
/// succeed only for `fixable`; `slow` sleeps past any short timeout.
#[cfg(unix)]
fn fake_python(dir: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-python");
    fs::write(
        &path,
        r#"#!/bin/sh
if [ "$1" = "-c" ]; then
  [ "$3" = "present_pkg" ] && exit 0
  exit 1
fi
for last; do :; done
[ "$last" = "fixable" ] && exit 0
[ "$last" = "slow" ] && exec sleep 5
echo "ERROR: No matching distribution found for $last" >&2
exit 1
"#,
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

const MIXED_CONFIG: &str = r#"
packages:
  - present_pkg
  - fixable
  - broken
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pyensure"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Python interpreter"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pyensure"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pyensure"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn list_shows_builtin_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pyensure(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages (38):"))
        .stdout(predicate::str::contains("imports as yaml"));
    Ok(())
}

#[test]
fn list_json_uses_project_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [numpy, scikit-learn]\n");
    let output = pyensure(temp.path()).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["packages"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["packages"][1]["probe"], "sklearn");
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pyensure(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyensure"));
    Ok(())
}

#[test]
fn completions_ignore_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [unclosed\n");
    pyensure(temp.path())
        .args(["completions", "zsh"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn malformed_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [unclosed\n");
    pyensure(temp.path()).arg("check").assert().code(2);
    Ok(())
}

#[test]
fn unknown_config_key_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("pakages: [numpy]\n");
    pyensure(temp.path()).arg("check").assert().code(2);
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pyensure(temp.path())
        .args(["--config", "does-not-exist.yml", "list"])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn zero_timeout_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pyensure(temp.path())
        .args(["--timeout", "0", "list"])
        .assert()
        .code(2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn everything_present_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [numpy, pandas]\n");
    pyensure(temp.path())
        .args(["--python", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All required packages are already installed!",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn nothing_installable_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [numpy, pandas]\n");
    pyensure(temp.path())
        .args(["--python", "false", "ensure"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing packages: numpy, pandas"))
        .stdout(predicate::str::contains("Installation Summary:"))
        .stderr(predicate::str::contains(
            "All installation strategies failed for pandas",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn unlaunchable_interpreter_degrades_to_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("packages: [numpy]\n");
    pyensure(temp.path())
        .args(["--python", "/nonexistent/python3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing packages: numpy"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn mixed_manifest_succeeds_when_any_install_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    pyensure(temp.path())
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing packages: fixable, broken"))
        .stdout(predicate::str::contains("fixable installed successfully"))
        .stderr(predicate::str::contains(
            "No matching distribution found for broken",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn strict_mode_requires_every_install() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    pyensure(temp.path())
        .arg("--python")
        .arg(&python)
        .arg("--strict")
        .assert()
        .code(1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_reports_without_installing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    pyensure(temp.path())
        .arg("check")
        .arg("--python")
        .arg(&python)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing packages: fixable, broken"))
        .stdout(predicate::str::contains("installed successfully").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn ensure_json_reports_attempts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    let output = pyensure(temp.path())
        .args(["ensure", "--json", "--python"])
        .arg(&python)
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["successes"], 1);
    assert_eq!(json["failures"], 1);
    assert_eq!(json["installs"][0]["package"], "fixable");
    assert_eq!(json["installs"][0]["attempts"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["installs"][1]["attempts"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["installs"][1]["attempts"][0]["outcome"], "exited");
    Ok(())
}

#[cfg(unix)]
#[test]
fn install_timeout_moves_to_next_strategy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
packages: [slow]
strategies:
  - name: only
    args: [-m, pip, install, "{package}"]
"#,
    );
    let python = fake_python(temp.path());
    pyensure(temp.path())
        .arg("--python")
        .arg(&python)
        .args(["--timeout", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out after 1s"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn quiet_mode_shows_attempts_and_summary_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    pyensure(temp.path())
        .arg("-q")
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing fixable (strategy 1)..."))
        .stdout(predicate::str::contains("fixable installed successfully"))
        .stdout(predicate::str::contains("Installation Summary:"))
        .stdout(predicate::str::contains("Python Dependency Checker").not())
        .stdout(predicate::str::contains("Missing packages").not())
        .stdout(predicate::str::contains("Installing 2 packages").not());
    Ok(())
}

#[test]
fn quiet_mode_still_prints_requested_listing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    pyensure(temp.path())
        .args(["-q", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages (38):"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn quiet_json_is_still_printed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(MIXED_CONFIG);
    let python = fake_python(temp.path());
    let output = pyensure(temp.path())
        .args(["-q", "check", "--json", "--python"])
        .arg(&python)
        .output()?;

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["present"][0], "present_pkg");
    Ok(())
}
