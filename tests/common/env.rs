//! Test environment builder for isolated Structuresmith runs.
//!
//! Each `TestEnv` owns a temp directory used as the working directory, so
//! the default `anvil.yml`, `templates/` and `out/` paths all land inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory plus helpers to run the binary in it
pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path of a generated file: `out/<project>/<destination>`
    pub fn output_path(&self, project: &str, destination: &str) -> PathBuf {
        self.path("out").join(project).join(destination)
    }

    pub fn read_output(&self, project: &str, destination: &str) -> String {
        let path = self.output_path(project, destination);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Parsed manifest of a project
    pub fn read_manifest(&self, project: &str) -> serde_json::Value {
        let path = self.output_path(project, ".anvil.lock");
        let raw = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&raw).expect("manifest is JSON")
    }

    /// Manifest paths in file order
    pub fn manifest_paths(&self, project: &str) -> Vec<String> {
        self.read_manifest(project)["files"]
            .as_array()
            .map(|files| {
                files
                    .iter()
                    .filter_map(|f| f["path"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the declaration file
    pub fn write_config(&self, yaml: &str) {
        self.write_file("anvil.yml", yaml);
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        write_file(self.root.path(), relative, content);
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("STRUCTURESMITH_CONFIG")
            .env_remove("STRUCTURESMITH_OUTPUT")
            .env_remove("STRUCTURESMITH_TEMPLATES")
            .env_remove("STRUCTURESMITH_MAX_PARALLEL")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute structuresmith");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    config: Option<String>,
    templates: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Set `anvil.yml` content
    pub fn with_config(mut self, yaml: &str) -> Self {
        self.config = Some(yaml.to_string());
        self
    }

    /// Add a file under `templates/`
    pub fn with_template(mut self, relative: &str, content: &str) -> Self {
        self.templates
            .push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        if let Some(config) = &self.config {
            write_file(root.path(), "anvil.yml", config);
        }
        for (relative, content) in &self.templates {
            write_file(root.path(), &format!("templates/{relative}"), content);
        }

        TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_structuresmith")),
        }
    }
}
