//! Filename parsing for the consumed APK naming conventions.
//!
//! The build pipeline names artifacts `<name>_v<major>.<minor>.<patch>`
//! followed by an optional flavor and a build suffix. Parsing is exact
//! textual pattern matching with no fuzzy fallback: a filename that does
//! not conform aborts the invocation.

use regex::Regex;

use crate::error::PublishError;

/// Metadata derived from an artifact filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Name part preceding `_v` (the Gradle module/variant name).
    pub base_name: String,
    /// Dotted version triple, e.g. `1.2.3`.
    pub version: String,
    /// Build-variant label, when the convention carries one.
    pub flavor: Option<String>,
}

/// Which filename convention an invocation variant consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `<name>_v<x>.<y>.<z>[-<flavor>]-<suffix>.apk` - Gradle build output,
    /// suffix is the commit hash the build appends.
    Flavored,
    /// `<name>_v<x>.<y>.<z>.apk` - release staging, no flavor group.
    Plain,
}

impl Convention {
    fn pattern(self) -> &'static str {
        match self {
            Convention::Flavored => r"^(.+)_v(\d+\.\d+\.\d+)(?:-(.+))?-.*\.apk$",
            Convention::Plain => r"^(.+)_v(\d+\.\d+\.\d+)\.apk$",
        }
    }

    /// Convention name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Convention::Flavored => "flavored",
            Convention::Plain => "plain",
        }
    }
}

/// Compiled matcher for one naming convention.
pub struct FilenameParser {
    convention: Convention,
    regex: Regex,
}

impl FilenameParser {
    pub fn new(convention: Convention) -> Self {
        // Both patterns are fixed literals; compilation cannot fail.
        let regex = Regex::new(convention.pattern()).expect("fixed naming pattern");
        Self { convention, regex }
    }

    /// Extract `base_name`, `version` and optional `flavor` as the literal
    /// capture-group substrings.
    pub fn parse(&self, filename: &str) -> Result<ParsedName, PublishError> {
        let caps = self
            .regex
            .captures(filename)
            .ok_or_else(|| PublishError::BadName {
                name: filename.to_string(),
                convention: self.convention.name(),
            })?;

        Ok(ParsedName {
            base_name: caps[1].to_string(),
            version: caps[2].to_string(),
            flavor: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }
}
