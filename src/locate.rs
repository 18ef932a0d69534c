//! Artifact discovery - recursive directory scan with an extension filter.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::PublishError;

/// Collect every regular file under `dir` whose name ends with `extension`.
///
/// Traversal order is filesystem-dependent and not guaranteed stable.
/// Callers that need exactly one match go through [`find_single`].
pub fn find_artifacts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, PublishError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| PublishError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Find the single artifact the pipeline expects.
///
/// Zero matches fails with `NotFound`. More than one fails with `Ambiguous`
/// listing every candidate, so the CI log shows what was actually in the
/// directory.
pub fn find_single(dir: &Path, extension: &str) -> Result<PathBuf, PublishError> {
    let mut found = find_artifacts(dir, extension)?;
    match found.len() {
        0 => Err(PublishError::NotFound {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
        1 => Ok(found.remove(0)),
        _ => {
            // Stable listing regardless of traversal order.
            found.sort();
            Err(PublishError::Ambiguous {
                dir: dir.to_path_buf(),
                extension: extension.to_string(),
                candidates: found,
            })
        }
    }
}
