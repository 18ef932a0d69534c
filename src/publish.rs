//! Metadata publishing to the CI environment file.
//!
//! Downstream pipeline steps read the platform environment file to pick up
//! key/value pairs set by earlier steps. The file is append-only across
//! steps: publishing the same key twice yields two lines, and the platform
//! takes the later one.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PublishError;

/// Key-value sink receiving the derived metadata.
///
/// The production sink appends to the CI environment file; tests substitute
/// an in-memory recorder.
pub trait EnvSink {
    fn set(&mut self, key: &str, value: &str) -> Result<(), PublishError>;
}

/// Sink appending `KEY=VALUE` lines to the platform environment file
/// (named by `GITHUB_ENV` on the hosting platform).
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnvSink for EnvFile {
    fn set(&mut self, key: &str, value: &str) -> Result<(), PublishError> {
        // No escaping is applied; a newline would smuggle a second entry
        // into the line-oriented file.
        if key.contains('\n') || value.contains('\n') {
            return Err(PublishError::MultilineValue {
                key: key.to_string(),
            });
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{key}={value}")?;

        println!("  {key}={value}");
        Ok(())
    }
}
