//! Integration tests for config module public API.

use pyensure::config::{
    load_config, CliOverrides, EnsureConfig, Settings, DEFAULT_INSTALL_TIMEOUT_SECS,
};
use pyensure::runner::SuccessPolicy;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(temp: &TempDir, content: &str) {
    let dir = temp.path().join(".pyensure");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), content).unwrap();
}

#[test]
fn public_api_is_accessible() {
    let _config = EnsureConfig::default();
    let _overrides = CliOverrides::default();
    let settings = Settings::default();
    assert_eq!(
        settings.install_timeout,
        Duration::from_secs(DEFAULT_INSTALL_TIMEOUT_SECS)
    );
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        r#"
python: /opt/venv/bin/python
timeout_secs: 300
probe_timeout_secs: 10
strict: true
packages:
  - numpy
  - PyYAML
extra_packages:
  - attrs
aliases:
  attrs: attr
strategies:
  - name: plain
    args: [-m, pip, install, "{package}"]
  - name: user
    args: [-m, pip, install, --user, "{package}"]
"#,
    );

    let config = load_config(temp.path(), None).unwrap();
    let settings = Settings::resolve(&config, &CliOverrides::default()).unwrap();

    assert_eq!(settings.python, "/opt/venv/bin/python");
    assert_eq!(settings.install_timeout, Duration::from_secs(300));
    assert_eq!(settings.probe_timeout, Duration::from_secs(10));
    assert_eq!(settings.policy, SuccessPolicy::AllSucceed);
    assert_eq!(settings.manifest.entries(), ["numpy", "PyYAML", "attrs"]);
    assert_eq!(settings.aliases.resolve("attrs"), "attr");
    assert_eq!(settings.aliases.resolve("PyYAML"), "yaml");
    assert_eq!(settings.strategies.len(), 2);
    assert_eq!(settings.strategies[0].name, "plain");
}

#[test]
fn no_config_file_uses_builtin_defaults() {
    let temp = TempDir::new().unwrap();
    let config = load_config(temp.path(), None).unwrap();
    let settings = Settings::resolve(&config, &CliOverrides::default()).unwrap();
    assert_eq!(settings.manifest.len(), 38);
    assert_eq!(settings.strategies.len(), 3);
    assert_eq!(settings.policy, SuccessPolicy::AnySuccess);
}

#[test]
fn explicit_config_path_wins() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "packages: [numpy]\n");
    let other = temp.path().join("other.yml");
    fs::write(&other, "packages: [pandas, scipy]\n").unwrap();

    let config = load_config(temp.path(), Some(&other)).unwrap();
    assert_eq!(
        config.packages,
        Some(vec!["pandas".to_string(), "scipy".to_string()])
    );
}

#[test]
fn parse_errors_are_config_errors() {
    let temp = TempDir::new().unwrap();
    write_config(&temp, "timeout_secs: soon\n");
    let err = load_config(temp.path(), None).unwrap_err();
    assert!(err.is_config_error());
    assert!(err.to_string().contains("config.yml"));
}

#[test]
fn invalid_strategy_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_config(
        &temp,
        r#"
strategies:
  - name: ""
    args: [-m, pip, install]
"#,
    );
    let config = load_config(temp.path(), None).unwrap();
    let err = Settings::resolve(&config, &CliOverrides::default()).unwrap_err();
    assert!(err.is_config_error());
}
