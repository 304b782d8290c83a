// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Writing generated bindings to disk.

use std::io::Write;
use std::path::Path;

use crate::{GenerateError, Result};

/// Replace `path` with `contents`.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`. A failure at any step leaves `path` as it was.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(GenerateError::io(dir))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".cudart-bindgen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(GenerateError::io(dir))?;

    tmp.write_all(contents.as_bytes())
        .map_err(GenerateError::io(tmp.path()))?;
    tmp.as_file()
        .sync_all()
        .map_err(GenerateError::io(tmp.path()))?;

    // dropping the NamedTempFile on the error path removes it
    tmp.persist(path)
        .map_err(|e| GenerateError::io(path)(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "bindings written");
    Ok(())
}

/// Whether `path` already holds exactly `contents`. A missing file is stale.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(GenerateError::io(path)(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leftovers(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(".cudart-bindgen-"))
            .collect()
    }

    #[test]
    fn test_write_creates_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sys.rs");

        write_atomically(&path, "pub type a = u32;\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub type a = u32;\n");

        write_atomically(&path, "pub type b = u32;\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub type b = u32;\n");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("gl").join("sys.rs");

        write_atomically(&path, "// empty\n").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_failed_write_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // a directory cannot be replaced by a file rename
        let path = dir.path().join("sys.rs");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_atomically(&path, "pub type a = u32;\n").unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(path.join("keep").is_file());
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_is_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sys.rs");

        assert!(!is_up_to_date(&path, "x").unwrap());
        std::fs::write(&path, "x").unwrap();
        assert!(is_up_to_date(&path, "x").unwrap());
        assert!(!is_up_to_date(&path, "y").unwrap());
    }
}
