// SPDX-License-Identifier: PMPL-1.0-or-later

//! Atomic output of the generated artifacts
//!
//! Every artifact is staged to a temporary file beside its destination and
//! only persisted once all of them staged cleanly. An artifact whose bytes
//! already match the destination is left untouched.

use crate::error::{GenerateError, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    /// BLAKE3 of the content, hex.
    pub blake3: String,
    pub bytes: usize,
    /// False when the destination already held identical content.
    pub changed: bool,
}

pub fn digest(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn stage(path: &Path, content: &str) -> Result<NamedTempFile> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(|source| GenerateError::io("creating", parent, source))?;
    let mut staged =
        NamedTempFile::new_in(parent).map_err(|source| GenerateError::io("staging", path, source))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|_| staged.flush())
        .map_err(|source| GenerateError::io("writing", path, source))?;
    Ok(staged)
}

fn unchanged(path: &Path, content: &str) -> bool {
    fs::read(path)
        .map(|existing| existing == content.as_bytes())
        .unwrap_or(false)
}

/// Write `(path, content)` pairs, all or nothing up to the final renames.
pub fn write_artifacts(artifacts: &[(&Path, &str)]) -> Result<Vec<WrittenArtifact>> {
    let mut staged = Vec::with_capacity(artifacts.len());
    for (path, content) in artifacts {
        let file = if unchanged(path, content) {
            None
        } else {
            Some(stage(path, content)?)
        };
        staged.push((*path, *content, file));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (path, content, file) in staged {
        let changed = file.is_some();
        if let Some(file) = file {
            file.persist(path)
                .map_err(|err| GenerateError::io("replacing", path, err.error))?;
        }
        written.push(WrittenArtifact {
            path: path.to_path_buf(),
            blake3: digest(content),
            bytes: content.len(),
            changed,
        });
    }
    Ok(written)
}

/// Remove whatever sits at `paths` so a failed run leaves no stale output.
pub fn invalidate(paths: &[&Path]) -> Vec<PathBuf> {
    let mut removed = Vec::new();
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => removed.push(path.to_path_buf()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => eprintln!("warning: could not remove {}: {}", path.display(), err),
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let cpp = dir.path().join("Core/Src/Translation.cpp");
        let unit = dir.path().join("Core/Inc/unit.h");

        let written =
            write_artifacts(&[(cpp.as_path(), "// cpp\n"), (unit.as_path(), "// unit\n")]).unwrap();

        assert_eq!(fs::read_to_string(&cpp).unwrap(), "// cpp\n");
        assert_eq!(fs::read_to_string(&unit).unwrap(), "// unit\n");
        assert!(written.iter().all(|artifact| artifact.changed));
        assert_eq!(written[0].blake3, digest("// cpp\n"));
        assert_eq!(written[0].bytes, 7);
    }

    #[test]
    fn identical_content_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unit.h");
        write_artifacts(&[(path.as_path(), "same")]).unwrap();
        let again = write_artifacts(&[(path.as_path(), "same")]).unwrap();
        assert!(!again[0].changed);

        let different = write_artifacts(&[(path.as_path(), "other")]).unwrap();
        assert!(different[0].changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "other");
    }

    #[test]
    fn no_temporary_files_are_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Translation.cpp");
        write_artifacts(&[(path.as_path(), "x")]).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn invalidate_removes_existing_files_only() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("Translation.cpp");
        let absent = dir.path().join("unit.h");
        fs::write(&present, "stale").unwrap();

        let removed = invalidate(&[present.as_path(), absent.as_path()]);
        assert_eq!(removed, vec![present.clone()]);
        assert!(!present.exists());
    }

    #[test]
    fn digest_is_blake3_hex() {
        assert_eq!(digest("").len(), 64);
        assert_ne!(digest("a"), digest("b"));
    }
}
