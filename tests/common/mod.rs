//! Shared testing utilities for hlb CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated workspace for CLI exercises.
///
/// Lays files out the way the tool expects them by default:
/// `config/defaults.yaml`, `templates/`, and `build/` under a temp root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated workspace.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the workspace root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `hlb` binary in the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hlb").expect("Failed to locate hlb binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Write a file at `relative` under the workspace root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the base configuration at its default location.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("config/defaults.yaml", content)
    }

    /// Write a template under the default template root.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("templates/{}", name), content)
    }

    /// Path to an artifact under the default output root.
    pub fn artifact(&self, name: &str) -> PathBuf {
        self.root().join("build").join(name)
    }

    /// Read an artifact from the default output root.
    pub fn read_artifact(&self, name: &str) -> String {
        fs::read_to_string(self.artifact(name)).unwrap()
    }

    /// Seed a minimal valid workspace: full config plus one shell template.
    pub fn seed_minimal(&self) {
        self.write_config("app:\n  name: demo\ninstaller: {}\ndocker: {}\n");
        self.write_template("run.sh.j2", "echo {{ app.name }}\n");
    }
}
