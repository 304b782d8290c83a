// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Drives `bindgen` for a [`TargetSpec`].
//!
//! Every run logs the equivalent `bindgen` command line before parsing any
//! header, validates its inputs up front, and never leaves a partially
//! written output file behind.

use bindgen::{Builder, Formatter};
use cudart_config::CudaToolkit;
use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};

use crate::options::GeneratorOptions;
use crate::target::{BindingTarget, TargetSpec};
use crate::verify::{self, VerifyReport};
use crate::{GenerateError, Result, SymbolKind, output};

/// What to do with freshly generated bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Replace the output file when the contents changed
    Write,
    /// Fail with [`GenerateError::Stale`] when the output file differs
    Check,
    /// Print to stdout, leave the output file alone
    Stdout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    Written,
    Unchanged,
    UpToDate,
    Printed,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub target: BindingTarget,
    pub output: PathBuf,
    pub status: OutputStatus,
    pub counts: BTreeMap<SymbolKind, usize>,
}

impl GenerationReport {
    pub fn count(&self, kind: SymbolKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// CUDA include directory: the configured root, else the located toolkit.
    pub fn include_dir(&self) -> Result<PathBuf> {
        let toolkit = match &self.options.cuda_root {
            Some(root) => CudaToolkit::new(root),
            None => CudaToolkit::locate().ok_or(GenerateError::ToolkitNotFound)?,
        };
        Ok(toolkit.include_dir())
    }

    /// Configure `bindgen` for `spec`.
    ///
    /// Fails before touching libclang when the header or the include
    /// directory does not exist.
    pub fn builder(&self, spec: &TargetSpec, include_dir: &Path) -> Result<Builder> {
        if !spec.header.is_file() {
            return Err(GenerateError::HeaderNotFound(spec.header.clone()));
        }
        if !include_dir.is_dir() {
            return Err(GenerateError::IncludeDirNotFound(include_dir.to_path_buf()));
        }

        // compile now so a bad pattern is reported as such, not as a bindgen failure
        spec.allowlist.compile()?;

        let options = &self.options;
        let mut builder = Builder::default()
            .header(spec.header.display().to_string())
            .clang_arg(format!("-I{}", include_dir.display()))
            .clang_args(options.extra_clang_args.iter().cloned())
            .default_enum_style(options.enum_style.variation())
            .generate_comments(options.doc_comments)
            .derive_default(options.derive_default)
            .derive_eq(options.derive_eq)
            .derive_partialeq(options.derive_eq)
            .derive_hash(options.derive_hash)
            .derive_ord(options.derive_ord)
            .derive_partialord(options.derive_ord)
            .layout_tests(options.layout_tests)
            .allowlist_recursively(spec.allowlist_recursively)
            .formatter(if options.rustfmt {
                Formatter::Rustfmt
            } else {
                Formatter::None
            });

        for pattern in spec.allowlist.patterns(SymbolKind::Type) {
            builder = builder.allowlist_type(pattern);
        }
        for pattern in spec.allowlist.patterns(SymbolKind::Function) {
            builder = builder.allowlist_function(pattern);
        }
        for pattern in spec.allowlist.patterns(SymbolKind::Var) {
            builder = builder.allowlist_var(pattern);
        }
        for line in &spec.raw_lines {
            builder = builder.raw_line(line);
        }
        if options.use_core {
            builder = builder.use_core();
        }
        if options.dynamic_loading {
            builder = builder
                .dynamic_library_name(&spec.library_name)
                .dynamic_link_require_all(false);
        }

        Ok(builder)
    }

    /// The `bindgen` command line equivalent to [`Generator::builder`].
    pub fn command_line(&self, spec: &TargetSpec, include_dir: &Path) -> Result<Vec<String>> {
        let mut args = vec!["bindgen".to_string()];
        args.extend(self.builder(spec, include_dir)?.command_line_flags());
        Ok(args)
    }

    /// Run `bindgen` and return the generated source.
    pub fn generate(&self, spec: &TargetSpec, include_dir: &Path) -> Result<String> {
        let builder = self.builder(spec, include_dir)?;

        tracing::info!(
            binding = %spec.target,
            command = %format_command_line(
                &std::iter::once("bindgen".to_string())
                    .chain(builder.command_line_flags())
                    .collect::<Vec<_>>()
            ),
            "running binding generator"
        );

        // libclang loading failures surface as panics inside bindgen
        let bindings = catch_unwind(AssertUnwindSafe(|| builder.generate()))
            .map_err(|panic| GenerateError::GeneratorPanicked(panic_message(panic)))??;

        Ok(bindings.to_string())
    }

    /// Generate, verify and emit one target.
    pub fn run(&self, spec: &TargetSpec, mode: OutputMode) -> Result<GenerationReport> {
        let include_dir = self.include_dir()?;
        let source = self.generate(spec, &include_dir)?;

        let matcher = spec.allowlist.compile()?;
        let library_name = self
            .options
            .dynamic_loading
            .then_some(spec.library_name.as_str());
        let report: VerifyReport = verify::verify(&source, &matcher, library_name)?;

        tracing::debug!(
            binding = %spec.target,
            types = report.count(SymbolKind::Type),
            functions = report.count(SymbolKind::Function),
            vars = report.count(SymbolKind::Var),
            "generated bindings verified"
        );

        let status = match mode {
            OutputMode::Stdout => {
                print!("{source}");
                OutputStatus::Printed
            }
            OutputMode::Check => {
                if !output::is_up_to_date(&spec.output, &source)? {
                    return Err(GenerateError::Stale(spec.output.clone()));
                }
                OutputStatus::UpToDate
            }
            OutputMode::Write => {
                if output::is_up_to_date(&spec.output, &source)? {
                    OutputStatus::Unchanged
                } else {
                    output::write_atomically(&spec.output, &source)?;
                    OutputStatus::Written
                }
            }
        };

        Ok(GenerationReport {
            target: spec.target,
            output: spec.output.clone(),
            status,
            counts: report.counts(),
        })
    }
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Render arguments as a copy-pasteable shell command.
pub fn format_command_line(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
