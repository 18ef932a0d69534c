//! Configuration management for dokupub.
//!
//! Reads configuration from the environment (a `.env` file is loaded in
//! main before this runs). Defaults match the CI pipeline layout the
//! publisher was written for.

use std::path::{Path, PathBuf};

/// Product name used in canonical artifact filenames.
pub const DEFAULT_PRODUCT_NAME: &str = "NovelDokusha";

/// Artifact extension the locator filters on.
pub const ARTIFACT_EXTENSION: &str = ".apk";

/// Gradle APK output directory, relative to the working directory.
pub const APK_OUTPUT_SUBDIR: &str = "app/build/outputs/apk";

/// Release staging directory, relative to the home directory.
pub const RELEASE_SUBDIR: &str = "github_release";

/// Dokupub configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for flavored build APKs (default: <cwd>/app/build/outputs/apk)
    pub apk_dir: PathBuf,
    /// Directory scanned for release APKs (default: <home>/github_release)
    pub release_dir: PathBuf,
    /// Product name used for canonical filenames (default: NovelDokusha)
    pub product_name: String,
    /// Extension filter for the artifact scan.
    pub extension: String,
    /// CI environment file receiving KEY=VALUE lines, from GITHUB_ENV.
    pub env_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `DOKUPUB_APK_DIR`, `DOKUPUB_RELEASE_DIR` and `DOKUPUB_PRODUCT`
    /// override the defaults. `GITHUB_ENV` is supplied by the CI platform.
    pub fn load(base_dir: &Path) -> Self {
        let apk_dir = std::env::var("DOKUPUB_APK_DIR")
            .map(|s| resolve(base_dir, &s))
            .unwrap_or_else(|_| base_dir.join(APK_OUTPUT_SUBDIR));

        let release_dir = std::env::var("DOKUPUB_RELEASE_DIR")
            .map(|s| resolve(base_dir, &s))
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| base_dir.to_path_buf())
                    .join(RELEASE_SUBDIR)
            });

        let product_name =
            std::env::var("DOKUPUB_PRODUCT").unwrap_or_else(|_| DEFAULT_PRODUCT_NAME.to_string());

        let env_file = std::env::var_os("GITHUB_ENV").map(PathBuf::from);

        Self {
            apk_dir,
            release_dir,
            product_name,
            extension: ARTIFACT_EXTENSION.to_string(),
            env_file,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  APK_DIR: {}", self.apk_dir.display());
        println!("  RELEASE_DIR: {}", self.release_dir.display());
        println!("  PRODUCT: {}", self.product_name);
        println!("  EXTENSION: {}", self.extension);
        match &self.env_file {
            Some(path) => println!("  GITHUB_ENV: {}", path.display()),
            None => println!("  GITHUB_ENV: NOT SET (publish commands will fail)"),
        }
    }
}

/// Resolve a possibly-relative override against the base directory.
fn resolve(base_dir: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
