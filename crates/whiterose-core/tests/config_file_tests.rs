mod common;

use common::{JSON_FIXTURE, YAML_FIXTURE, write_config};
use whiterose_core::{ConfigFile, ConfigLocator, Environment, RepositorySpec, WhiteroseError};

fn expected_repositories() -> Vec<RepositorySpec> {
    vec![
        RepositorySpec::new("https://github.com/example/repo1.git", "/tmp/repo1"),
        RepositorySpec::new("git@github.com:example/repo2.git", "/tmp/repo2"),
    ]
}

#[test]
fn json_file_loads_repositories_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "config.json", JSON_FIXTURE);

    let config = ConfigFile::from_path(&path).unwrap();

    assert_eq!(config.repositories, expected_repositories());
    assert_eq!(config.applications.len(), 1);
    assert_eq!(config.applications[0].command, "git");
}

#[test]
fn yaml_and_yml_files_match_json() {
    let dir = tempfile::tempdir().unwrap();
    let json = ConfigFile::from_path(&write_config(dir.path(), "c.json", JSON_FIXTURE)).unwrap();
    let yaml = ConfigFile::from_path(&write_config(dir.path(), "c.yaml", YAML_FIXTURE)).unwrap();
    let yml = ConfigFile::from_path(&write_config(dir.path(), "c.yml", YAML_FIXTURE)).unwrap();

    assert_eq!(json, yaml);
    assert_eq!(yaml, yml);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigFile::from_path(&dir.path().join("nonexistent.json")).unwrap_err();

    assert!(matches!(err, WhiteroseError::Read { .. }));
}

#[test]
fn invalid_json_reports_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "invalid.json", "{invalid json");

    let err = ConfigFile::from_path(&path).unwrap_err();

    assert!(err.is_parse_error());
    assert!(err.to_string().contains("invalid.json"));
}

#[test]
fn invalid_yaml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = write_config(dir.path(), "invalid.yaml", "invalid: [yaml");
    let yml = write_config(dir.path(), "invalid.yml", "invalid: [yml");

    assert!(ConfigFile::from_path(&yaml).unwrap_err().is_parse_error());
    assert!(ConfigFile::from_path(&yml).unwrap_err().is_parse_error());
}

#[test]
fn unknown_extension_is_rejected_before_reading() {
    let err = ConfigFile::from_path(std::path::Path::new("/does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, WhiteroseError::UnsupportedFormat { .. }));
}

#[test]
fn located_home_config_loads() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), ".config.yaml", YAML_FIXTURE);
    let env = Environment::default().with_home(home.path());

    let path = ConfigLocator::new(&env).locate().unwrap();
    let config = ConfigFile::from_path(&path).unwrap();

    assert_eq!(config.repositories, expected_repositories());
}
