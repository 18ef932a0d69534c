//! Shared test utilities for dokupub tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use dokupub::config::Config;

/// Test environment with a temporary directory layout mirroring the CI job.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Gradle APK output directory
    pub apk_dir: PathBuf,
    /// Release staging directory
    pub release_dir: PathBuf,
    /// CI environment file (created on first append)
    pub env_file: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let apk_dir = base.join("app/build/outputs/apk");
        let release_dir = base.join("github_release");
        let env_file = base.join("github.env");

        fs::create_dir_all(&apk_dir).expect("Failed to create apk dir");
        fs::create_dir_all(&release_dir).expect("Failed to create release dir");

        Self {
            _temp_dir: temp_dir,
            apk_dir,
            release_dir,
            env_file,
        }
    }

    /// Build a configuration pointing at this environment.
    pub fn config(&self) -> Config {
        Config {
            apk_dir: self.apk_dir.clone(),
            release_dir: self.release_dir.clone(),
            product_name: "NovelDokusha".to_string(),
            extension: ".apk".to_string(),
            env_file: Some(self.env_file.clone()),
        }
    }
}

/// Create an artifact file with the given name.
pub fn create_artifact(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"apk bytes").expect("Failed to write artifact");
    path
}

/// Read the environment file as a list of lines (empty if never written).
pub fn env_lines(env_file: &Path) -> Vec<String> {
    fs::read_to_string(env_file)
        .unwrap_or_default()
        .lines()
        .map(|s| s.to_string())
        .collect()
}
