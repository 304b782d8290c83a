// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! The binding targets checked into `lib/cudart`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::allowlist::AllowList;

/// Location of the bindings crate relative to the workspace root.
pub const CUDART_CRATE_DIR: &str = "lib/cudart";

/// Name of the struct `bindgen` emits for dynamically loaded functions.
pub const DEFAULT_LIBRARY_NAME: &str = "Lib";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BindingTarget {
    /// CUDA runtime API (`cuda_runtime_api.h`)
    Runtime,
    /// CUDA / OpenGL interop (`cuda_gl_interop.h`)
    Gl,
}

impl BindingTarget {
    /// Every target, in the order they are generated.
    pub fn all() -> [BindingTarget; 2] {
        [BindingTarget::Runtime, BindingTarget::Gl]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BindingTarget::Runtime => "runtime",
            BindingTarget::Gl => "gl",
        }
    }

    /// Module directory under `lib/cudart/src`.
    fn module_dir(&self) -> &'static str {
        self.name()
    }

    pub fn allowlist(&self) -> AllowList {
        match self {
            BindingTarget::Runtime => AllowList::new()
                .types(["cuda.*", "CU.*", "dim3", "surfaceReference", "textureReference"])
                .functions(["cuda.*"])
                .vars(["cuda.*", "CUDART_VERSION"]),
            BindingTarget::Gl => AllowList::new()
                .types(["cudaGL.*", "GL(enum|uint)"])
                .functions(["cudaGL.*", "cudaGraphicsGL.*"])
                .vars(["cudaGL.*"]),
        }
    }

    /// Whether dependencies of allow-listed items are pulled in as well.
    ///
    /// The GL bindings reuse the runtime types through a glob import instead.
    fn allowlist_recursively(&self) -> bool {
        matches!(self, BindingTarget::Runtime)
    }

    fn raw_lines(&self) -> Vec<String> {
        match self {
            BindingTarget::Runtime => vec![],
            BindingTarget::Gl => vec!["use crate::runtime::sys::*;".to_string()],
        }
    }
}

impl fmt::Display for BindingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything needed to run the generator for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub target: BindingTarget,
    pub header: PathBuf,
    pub output: PathBuf,
    pub allowlist: AllowList,
    pub allowlist_recursively: bool,
    pub raw_lines: Vec<String>,
    pub library_name: String,
}

impl TargetSpec {
    pub fn for_target(target: BindingTarget, workspace_root: &Path) -> Self {
        let module_dir = workspace_root
            .join(CUDART_CRATE_DIR)
            .join("src")
            .join(target.module_dir());

        Self {
            target,
            header: module_dir.join("wrapper.h"),
            output: module_dir.join("sys.rs"),
            allowlist: target.allowlist(),
            allowlist_recursively: target.allowlist_recursively(),
            raw_lines: target.raw_lines(),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
        }
    }

    pub fn with_allowlist(mut self, allowlist: AllowList) -> Self {
        self.allowlist = allowlist;
        self
    }

    pub fn with_header(mut self, header: impl Into<PathBuf>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Workspace root as seen from this crate's manifest (`lib/bindgen`).
pub fn default_workspace_root() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    root.canonicalize().unwrap_or(root)
}
