//! Typed failures for the publish pipeline.
//!
//! Every variant is fatal: there is no local recovery, the process exits
//! nonzero and the surrounding CI pipeline marks the job failed.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the locate/parse/move/publish pipeline.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No artifact matched the extension filter.
    #[error("no {extension} file found under {}", .dir.display())]
    NotFound { dir: PathBuf, extension: String },

    /// More than one artifact matched the extension filter.
    #[error(
        "expected exactly one {extension} file under {}, found {}: {}",
        .dir.display(),
        .candidates.len(),
        list_candidates(.candidates)
    )]
    Ambiguous {
        dir: PathBuf,
        extension: String,
        candidates: Vec<PathBuf>,
    },

    /// Filename does not follow the expected naming convention.
    #[error("filename {name:?} does not match the {convention} naming convention")]
    BadName {
        name: String,
        convention: &'static str,
    },

    /// The environment file is line-oriented; values must stay single-line.
    #[error("value for {key} contains a newline")]
    MultilineValue { key: String },

    /// Filesystem failure while scanning, moving or appending.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn list_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
