// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! CUDA toolkit discovery.

use std::path::{Path, PathBuf};

use crate::environment_names::toolkit as env_toolkit;

/// Install prefix used by NVIDIA's Linux packages when no variable is set.
pub const DEFAULT_TOOLKIT_ROOT: &str = "/usr/local/cuda";

/// A CUDA toolkit installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CudaToolkit {
    root: PathBuf,
}

impl CudaToolkit {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the toolkit from the process environment.
    ///
    /// Checks `CUDA_PATH`, `CUDA_HOME`, `CUDA_ROOT` and `CUDA_TOOLKIT_ROOT_DIR`
    /// in that order, then falls back to [`DEFAULT_TOOLKIT_ROOT`] if it exists.
    pub fn locate() -> Option<Self> {
        Self::locate_with(crate::env_non_empty)
    }

    /// Same as [`CudaToolkit::locate`] with an injected variable lookup.
    pub fn locate_with<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in env_toolkit::LOOKUP_ORDER {
            if let Some(value) = lookup(var) {
                tracing::debug!(var, root = %value, "cuda toolkit selected from environment");
                return Some(Self::new(value));
            }
        }

        let fallback = Path::new(DEFAULT_TOOLKIT_ROOT);
        if fallback.is_dir() {
            tracing::debug!(root = DEFAULT_TOOLKIT_ROOT, "cuda toolkit found at default prefix");
            return Some(Self::new(fallback));
        }

        None
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding `cuda_runtime_api.h` and friends.
    pub fn include_dir(&self) -> PathBuf {
        self.root.join("include")
    }

    /// Candidate library directories, most specific first.
    pub fn library_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.root.join("lib64"),
            self.root.join("lib"),
            self.root.join("lib").join("x64"),
        ]
    }

    /// Library directories that exist on disk.
    pub fn existing_library_dirs(&self) -> Vec<PathBuf> {
        self.library_dirs()
            .into_iter()
            .filter(|dir| dir.is_dir())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_locate_prefers_cuda_path() {
        let toolkit = CudaToolkit::locate_with(lookup_from(&[
            ("CUDA_HOME", "/opt/cuda-home"),
            ("CUDA_PATH", "/opt/cuda-path"),
        ]))
        .unwrap();
        assert_eq!(toolkit.root(), Path::new("/opt/cuda-path"));
    }

    #[test]
    fn test_locate_falls_through_lookup_order() {
        let toolkit =
            CudaToolkit::locate_with(lookup_from(&[("CUDA_TOOLKIT_ROOT_DIR", "/opt/cuda-12")]))
                .unwrap();
        assert_eq!(toolkit.root(), Path::new("/opt/cuda-12"));
    }

    #[test]
    fn test_locate_without_variables_uses_default_prefix_only_if_present() {
        let located = CudaToolkit::locate_with(|_| None);
        if Path::new(DEFAULT_TOOLKIT_ROOT).is_dir() {
            assert_eq!(located.unwrap().root(), Path::new(DEFAULT_TOOLKIT_ROOT));
        } else {
            assert!(located.is_none());
        }
    }

    #[test]
    fn test_locate_reads_process_environment() {
        temp_env::with_vars(
            [
                ("CUDA_PATH", None),
                ("CUDA_HOME", Some("/opt/from-env")),
                ("CUDA_ROOT", None),
                ("CUDA_TOOLKIT_ROOT_DIR", None),
            ],
            || {
                let toolkit = CudaToolkit::locate().unwrap();
                assert_eq!(toolkit.root(), Path::new("/opt/from-env"));
            },
        );
    }

    #[test]
    fn test_layout() {
        let toolkit = CudaToolkit::new("/opt/cuda");
        assert_eq!(toolkit.include_dir(), PathBuf::from("/opt/cuda/include"));
        assert_eq!(
            toolkit.library_dirs(),
            vec![
                PathBuf::from("/opt/cuda/lib64"),
                PathBuf::from("/opt/cuda/lib"),
                PathBuf::from("/opt/cuda/lib/x64"),
            ]
        );
    }

    #[test]
    fn test_existing_library_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("lib64")).unwrap();

        let toolkit = CudaToolkit::new(dir.path());
        assert_eq!(toolkit.existing_library_dirs(), vec![dir.path().join("lib64")]);
    }
}
