// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Binding generation for the `cudart` crate.
//!
//! Each [`BindingTarget`] pairs a `wrapper.h` with an allow-list of symbol
//! name patterns and a fixed output file. [`Generator`] drives `bindgen`
//! with the configured output style, checks that nothing outside the
//! allow-list was emitted, and replaces the output file atomically.

pub mod allowlist;
pub mod flags;
pub mod generate;
pub mod logging;
pub mod options;
pub mod output;
pub mod target;
pub mod verify;

pub use allowlist::{AllowList, AllowListMatcher, SymbolKind};
pub use generate::{GenerationReport, Generator, OutputMode, OutputStatus, format_command_line};
pub use options::{EnumStyle, GeneratorOptions};
pub use target::{BindingTarget, TargetSpec};
pub use verify::{Symbol, VerifyReport};

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur while generating bindings.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("header not found: {}", .0.display())]
    HeaderNotFound(PathBuf),

    #[error("CUDA include directory not found: {}", .0.display())]
    IncludeDirNotFound(PathBuf),

    #[error("no CUDA toolkit found; set CUDA_PATH or pass --cuda-root")]
    ToolkitNotFound,

    #[error("invalid allow-list pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("binding generator failed: {0}")]
    Bindgen(#[from] bindgen::BindgenError),

    #[error("binding generator panicked: {0}")]
    GeneratorPanicked(String),

    #[error("failed to parse generated bindings: {0}")]
    Parse(#[from] syn::Error),

    #[error("generated bindings contain symbols outside the allow-list: {}", .0.join(", "))]
    DisallowedSymbols(Vec<String>),

    #[error("bindings at {} are out of date", .0.display())]
    Stale(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| GenerateError::Io { path, source }
    }
}
