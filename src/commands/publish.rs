//! Publish command - locate, rename and publish a build artifact.
//!
//! Each variant is a straight-line sequence: scan, match, derive, move,
//! publish. Any failure aborts before further side effects.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::locate;
use crate::parse::{Convention, FilenameParser};
use crate::publish::{EnvFile, EnvSink};
use crate::rename;

/// Publish target for the publish command.
pub enum PublishTarget {
    /// Flavored APK from the Gradle build output directory
    Apk,
    /// Release APK from the release staging directory
    Release,
}

/// Execute the publish command.
pub fn cmd_publish(target: PublishTarget, config: &Config) -> Result<()> {
    let Some(env_path) = config.env_file.as_deref() else {
        bail!("GITHUB_ENV is not set; dokupub publish must run inside the CI pipeline");
    };
    let mut sink = EnvFile::new(env_path);

    match target {
        PublishTarget::Apk => publish_apk(config, &mut sink),
        PublishTarget::Release => publish_release(config, &mut sink),
    }
}

/// Build-output variant: rename the flavored APK in place and emit
/// `APP_VERSION` plus `APK_FILE_PATH_<flavor>`.
pub fn publish_apk(config: &Config, sink: &mut dyn EnvSink) -> Result<()> {
    println!("=== Publish build APK ===");

    let source = locate::find_single(&config.apk_dir, &config.extension)?;
    println!("Found {}", source.display());

    let filename = file_name_of(&source)?;
    let parsed = FilenameParser::new(Convention::Flavored).parse(&filename)?;

    let canonical = rename::canonical_filename(&config.product_name, &parsed);
    let dir = source
        .parent()
        .context("located artifact has no parent directory")?;
    let dest = rename::move_artifact(&source, dir, &canonical)?;
    println!("Renamed to {}", dest.display());

    println!("Publishing metadata:");
    sink.set("APP_VERSION", &parsed.version)?;
    // The flavor substring is interpolated into the key verbatim.
    let path_key = match &parsed.flavor {
        Some(flavor) => format!("APK_FILE_PATH_{flavor}"),
        None => "APK_FILE_PATH".to_string(),
    };
    sink.set(&path_key, &dest.to_string_lossy())?;

    println!("Publish complete.");
    Ok(())
}

/// Release-staging variant: move the APK into the release directory under
/// its canonical name and emit `APP_RELEASE_VERSION` plus `APP_RELEASE_FILE`.
pub fn publish_release(config: &Config, sink: &mut dyn EnvSink) -> Result<()> {
    println!("=== Publish release APK ===");

    let source = locate::find_single(&config.release_dir, &config.extension)?;
    println!("Found {}", source.display());

    let filename = file_name_of(&source)?;
    let parsed = FilenameParser::new(Convention::Plain).parse(&filename)?;

    let canonical = rename::canonical_filename(&config.product_name, &parsed);
    let dest = rename::move_artifact(&source, &config.release_dir, &canonical)?;
    println!("Moved to {}", dest.display());

    println!("Publishing metadata:");
    sink.set("APP_RELEASE_VERSION", &parsed.version)?;
    sink.set("APP_RELEASE_FILE", &canonical)?;

    println!("Publish complete.");
    Ok(())
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("no filename in {}", path.display()))
}
