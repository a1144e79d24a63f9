#![allow(dead_code)]
use std::path::{Path, PathBuf};

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test config");
    path
}

/// A JSON fixture with two repositories and one application.
pub const JSON_FIXTURE: &str = r#"{
    "repositories": [
        { "url": "https://github.com/example/repo1.git", "directory": "/tmp/repo1" },
        { "url": "git@github.com:example/repo2.git", "directory": "/tmp/repo2" }
    ],
    "applications": [
        {
            "name": "Git",
            "command": "git",
            "versionFlag": "--version",
            "recommendedVersion": "2.43",
            "installInstructions": { "linux": "sudo apt install git", "darwin": "brew install git" }
        }
    ]
}"#;

/// The same document as [`JSON_FIXTURE`], in YAML.
pub const YAML_FIXTURE: &str = r#"
repositories:
  - url: https://github.com/example/repo1.git
    directory: /tmp/repo1
  - url: git@github.com:example/repo2.git
    directory: /tmp/repo2
applications:
  - name: Git
    command: git
    versionFlag: --version
    recommendedVersion: "2.43"
    installInstructions:
      linux: sudo apt install git
      darwin: brew install git
"#;
