// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Regenerate the FFI bindings of `lib/cudart`.
//!
//! ```text
//! # both targets, toolkit from CUDA_PATH / CUDA_HOME / /usr/local/cuda
//! cargo run -p cudart-bindgen
//!
//! # CI: fail when the checked-in bindings are stale
//! cargo run -p cudart-bindgen -- --check --cuda-root /usr/local/cuda-12.2
//! ```

use anyhow::Context as _;
use clap::Parser;
use cudart_bindgen::flags::Flags;
use cudart_bindgen::{Generator, OutputStatus, SymbolKind, TargetSpec, format_command_line};

fn main() -> anyhow::Result<()> {
    let flags = Flags::parse();
    cudart_bindgen::logging::init();

    let options = flags.load_options()?;
    let generator = Generator::new(options);
    let workspace_root = flags.workspace_root();

    if flags.print_command {
        let include_dir = generator.include_dir()?;
        for target in flags.targets() {
            let spec = TargetSpec::for_target(target, &workspace_root);
            let args = generator.command_line(&spec, &include_dir)?;
            println!("{} > {}", format_command_line(&args), spec.output.display());
        }
        return Ok(());
    }

    for target in flags.targets() {
        let spec = TargetSpec::for_target(target, &workspace_root);
        let report = generator
            .run(&spec, flags.output_mode())
            .with_context(|| format!("failed to generate {target} bindings"))?;

        let status = match report.status {
            OutputStatus::Written => "written",
            OutputStatus::Unchanged => "unchanged",
            OutputStatus::UpToDate => "up to date",
            OutputStatus::Printed => "printed",
        };
        tracing::info!(
            binding = %report.target,
            output = %report.output.display(),
            types = report.count(SymbolKind::Type),
            functions = report.count(SymbolKind::Function),
            vars = report.count(SymbolKind::Var),
            "bindings {status}"
        );
    }

    Ok(())
}
