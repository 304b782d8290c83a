// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Locating and opening `libcudart`.
//!
//! Candidates, in order:
//!   1. `CUDART_LIBRARY_PATH`, when set; nothing else is tried
//!   2. the library directories of the CUDA toolkit (see [`CudaToolkit::locate`])
//!   3. the bare library names, resolved by the system loader
//!
//! A candidate that opens but lacks a symbol the bindings call is skipped
//! like one that does not open.

use cudart_config::environment_names::runtime as env_runtime;
use cudart_config::{CudaToolkit, env_non_empty};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

#[cfg(windows)]
const LIBRARY_NAMES: &[&str] = &["cudart64_12.dll", "cudart64_110.dll"];

#[cfg(not(windows))]
const LIBRARY_NAMES: &[&str] = &["libcudart.so", "libcudart.so.12", "libcudart.so.11.0"];

/// The CUDA runtime library could not be opened from any candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load the CUDA runtime library (tried {}): {last_error}", display_paths(.tried))]
pub struct LoadError {
    pub tried: Vec<PathBuf>,
    pub last_error: String,
}

/// Why a single candidate was rejected.
#[derive(Debug, Error)]
pub(crate) enum OpenError {
    #[error(transparent)]
    Library(#[from] libloading::Error),

    #[error("missing symbols: {}", .0.join(", "))]
    MissingSymbols(Vec<&'static str>),
}

/// Pairs each listed field of a loaded `Lib` with whether it resolved.
macro_rules! resolved {
    ($lib:expr; $($symbol:ident),+ $(,)?) => {
        [$((stringify!($symbol), $lib.$symbol.is_ok())),+]
    };
}
pub(crate) use resolved;

/// The generated `Lib` tolerates unresolved symbols and panics when one is
/// called, so a candidate must export every symbol the bindings call.
pub(crate) fn require_resolved(symbols: &[(&'static str, bool)]) -> Result<(), OpenError> {
    let missing: Vec<&'static str> = symbols
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(OpenError::MissingSymbols(missing))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Library paths to try, in order.
pub(crate) fn candidates() -> Vec<PathBuf> {
    let explicit = env_non_empty(env_runtime::CUDART_LIBRARY_PATH).map(PathBuf::from);
    let toolkit = CudaToolkit::locate();
    candidates_with(explicit, toolkit.as_ref())
}

pub(crate) fn candidates_with(
    explicit: Option<PathBuf>,
    toolkit: Option<&CudaToolkit>,
) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path];
    }

    let mut candidates = Vec::new();
    if let Some(toolkit) = toolkit {
        for dir in toolkit.existing_library_dirs() {
            candidates.extend(LIBRARY_NAMES.iter().map(|name| dir.join(name)));
        }
    }
    candidates.extend(LIBRARY_NAMES.iter().map(PathBuf::from));
    candidates
}

/// Try `open` on each candidate and keep the first success.
pub(crate) fn open_first<T, E, F>(candidates: Vec<PathBuf>, open: F) -> Result<T, LoadError>
where
    E: std::fmt::Display,
    F: Fn(&Path) -> Result<T, E>,
{
    let mut last_error = String::from("no candidates");
    for path in &candidates {
        match open(path) {
            Ok(lib) => {
                tracing::debug!(path = %path.display(), "loaded CUDA runtime library");
                return Ok(lib);
            }
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "candidate rejected");
                last_error = e.to_string();
            }
        }
    }
    Err(LoadError {
        tried: candidates,
        last_error,
    })
}

/// Load once into `cell`. Failures are cached as well, so the candidates are
/// only probed the first time.
pub(crate) fn load<T, E, F>(
    cell: &'static OnceLock<Result<T, LoadError>>,
    open: F,
) -> Result<&'static T, LoadError>
where
    E: std::fmt::Display,
    F: Fn(&Path) -> Result<T, E>,
{
    cell.get_or_init(|| open_first(candidates(), open))
        .as_ref()
        .map_err(Clone::clone)
}

/// Whether `libcudart` can be loaded on this machine.
pub fn is_available() -> bool {
    crate::runtime::lib().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lib64")).unwrap();
        let toolkit = CudaToolkit::new(dir.path());

        let candidates = candidates_with(Some(PathBuf::from("/opt/libcudart.so.12")), Some(&toolkit));
        assert_eq!(candidates, vec![PathBuf::from("/opt/libcudart.so.12")]);
    }

    #[test]
    fn test_toolkit_dirs_come_before_bare_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lib64")).unwrap();
        let toolkit = CudaToolkit::new(dir.path());

        let candidates = candidates_with(None, Some(&toolkit));
        assert_eq!(candidates.len(), LIBRARY_NAMES.len() * 2);
        assert_eq!(candidates[0], dir.path().join("lib64").join(LIBRARY_NAMES[0]));
        assert_eq!(
            candidates[LIBRARY_NAMES.len()],
            PathBuf::from(LIBRARY_NAMES[0])
        );
    }

    #[test]
    fn test_missing_toolkit_dirs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = CudaToolkit::new(dir.path().join("absent"));

        let candidates = candidates_with(None, Some(&toolkit));
        let bare: Vec<PathBuf> = LIBRARY_NAMES.iter().map(PathBuf::from).collect();
        assert_eq!(candidates, bare);
    }

    #[test]
    fn test_open_first_returns_first_success() {
        let candidates = vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("c"),
        ];
        let opened = open_first(candidates, |path| {
            if path == Path::new("b") {
                Ok(path.to_path_buf())
            } else {
                Err(format!("cannot open {}", path.display()))
            }
        })
        .unwrap();
        assert_eq!(opened, PathBuf::from("b"));
    }

    #[test]
    fn test_open_first_lists_every_candidate() {
        let candidates = vec![PathBuf::from("a"), PathBuf::from("b")];
        let err = open_first(candidates, |path| -> Result<(), String> {
            Err(format!("cannot open {}", path.display()))
        })
        .unwrap_err();

        assert_eq!(err.tried, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(err.last_error, "cannot open b");
        assert_eq!(
            err.to_string(),
            "failed to load the CUDA runtime library (tried a, b): cannot open b"
        );
    }

    #[test]
    fn test_require_resolved_names_the_missing_symbols() {
        assert!(require_resolved(&[("cudaMalloc", true), ("cudaFree", true)]).is_ok());

        let err = require_resolved(&[("cudaMalloc", true), ("cudaFree", false), ("cudaMemcpy", false)])
            .unwrap_err();
        assert!(matches!(&err, OpenError::MissingSymbols(missing) if missing == &["cudaFree", "cudaMemcpy"]));
        assert_eq!(err.to_string(), "missing symbols: cudaFree, cudaMemcpy");
    }

    #[test]
    fn test_load_caches_the_outcome() {
        static CELL: OnceLock<Result<u32, LoadError>> = OnceLock::new();
        let calls = std::sync::atomic::AtomicUsize::new(0);

        let open = |_: &Path| -> Result<u32, String> {
            calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Err("not here".to_string())
        };
        let first = temp_env::with_var(env_runtime::CUDART_LIBRARY_PATH, Some("/nowhere/libcudart.so"), || {
            load(&CELL, open)
        });
        let second = load(&CELL, open);

        assert_eq!(first.unwrap_err().tried, vec![PathBuf::from("/nowhere/libcudart.so")]);
        assert!(second.is_err());
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
