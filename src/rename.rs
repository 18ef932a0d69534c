//! Canonical renaming and relocation of the located artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PublishError;
use crate::parse::ParsedName;

/// Build the canonical release filename: `<Product>_v<version>[_<flavor>].apk`.
pub fn canonical_filename(product_name: &str, parsed: &ParsedName) -> String {
    match &parsed.flavor {
        Some(flavor) => format!("{product_name}_v{}_{flavor}.apk", parsed.version),
        None => format!("{product_name}_v{}.apk", parsed.version),
    }
}

/// Move `source` into `dest_dir` under `filename`, creating `dest_dir` as
/// needed. Returns the destination path.
///
/// An existing destination file is replaced (platform rename semantics).
/// A rename across filesystems falls back to copy-then-remove.
pub fn move_artifact(
    source: &Path,
    dest_dir: &Path,
    filename: &str,
) -> Result<PathBuf, PublishError> {
    fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(filename);

    match fs::rename(source, &dest) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, &dest)?;
            fs::remove_file(source)?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(dest)
}
