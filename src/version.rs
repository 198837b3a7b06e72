// SPDX-License-Identifier: PMPL-1.0-or-later

//! Build version derivation
//!
//! The firmware's `version.h` holds `#define BUILD_VERSION "v2.xx"`. The
//! generated constant appends the short git revision, or ` git` when no
//! revision can be read.

use crate::error::{GenerateError, Result};
use crate::loader::read_text;
use regex::Regex;
use std::path::Path;
use std::process::Command;

const BUILD_VERSION_PATTERN: &str = r#"(?m)^\s*#define\s+BUILD_VERSION\s+"(.+?)""#;

/// Pull the `BUILD_VERSION` string out of a version header.
pub fn parse_build_version(header: &str) -> Option<String> {
    let pattern = Regex::new(BUILD_VERSION_PATTERN).ok()?;
    pattern
        .captures(header)
        .and_then(|captures| captures.get(1))
        .map(|version| version.as_str().to_string())
}

/// Upper-cased 7 character revision of `HEAD`, if git can tell.
pub fn git_revision(work_dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .current_dir(work_dir)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8(output.stdout).ok()?;
    let revision = revision.trim();
    if revision.is_empty() {
        None
    } else {
        Some(revision.to_uppercase())
    }
}

/// `<BUILD_VERSION>.<REV>`, or `<BUILD_VERSION> git` without a revision.
pub fn with_revision(base: &str, revision: Option<&str>) -> String {
    match revision {
        Some(revision) => format!("{}.{}", base, revision),
        None => format!("{} git", base),
    }
}

pub fn derive_build_version(header_path: &Path, work_dir: &Path) -> Result<String> {
    let header = read_text(header_path)
        .map_err(|err| GenerateError::Version(format!("{}", err)))?;
    let base = parse_build_version(&header).ok_or_else(|| {
        GenerateError::Version(format!(
            "no BUILD_VERSION define in {}",
            header_path.display()
        ))
    })?;
    Ok(with_revision(&base, git_revision(work_dir).as_deref()))
}
