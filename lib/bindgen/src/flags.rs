// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, ValueEnum};
use cudart_config::environment_names::bindgen as env_bindgen;
use std::path::PathBuf;

use crate::generate::OutputMode;
use crate::options::{EnumStyle, GeneratorOptions};
use crate::target::{self, BindingTarget};

/// Which bindings to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetSelection {
    Runtime,
    Gl,
    All,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cudart-bindgen",
    version,
    about = "Generate the CUDA runtime and CUDA-GL bindings checked into lib/cudart"
)]
pub struct Flags {
    /// Bindings to generate. Targets run in a fixed order and the first failure stops the run.
    #[arg(long, value_enum, default_value_t = TargetSelection::All)]
    pub target: TargetSelection,

    /// CUDA toolkit root. Defaults to CUDA_PATH, CUDA_HOME, CUDA_ROOT,
    /// CUDA_TOOLKIT_ROOT_DIR, then /usr/local/cuda.
    #[arg(long)]
    pub cuda_root: Option<PathBuf>,

    /// Workspace root holding lib/cudart. Defaults to the root this binary was built from.
    #[arg(long)]
    pub workspace_root: Option<PathBuf>,

    /// TOML file with generator options
    #[arg(long, env = env_bindgen::CUDART_BINDGEN_CONFIG)]
    pub config: Option<PathBuf>,

    /// Enum representation in the generated code
    #[arg(long, value_enum)]
    pub enum_style: Option<EnumStyle>,

    /// Keep doc comments from the C headers
    #[arg(long)]
    pub doc_comments: bool,

    /// Fail if the checked-in bindings differ from freshly generated ones; never writes
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the bindings instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Print the equivalent bindgen command line for each target and exit
    #[arg(long)]
    pub print_command: bool,
}

impl Flags {
    pub fn targets(&self) -> Vec<BindingTarget> {
        match self.target {
            TargetSelection::Runtime => vec![BindingTarget::Runtime],
            TargetSelection::Gl => vec![BindingTarget::Gl],
            TargetSelection::All => BindingTarget::all().to_vec(),
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.check {
            OutputMode::Check
        } else if self.stdout {
            OutputMode::Stdout
        } else {
            OutputMode::Write
        }
    }

    pub fn workspace_root(&self) -> PathBuf {
        self.workspace_root
            .clone()
            .unwrap_or_else(target::default_workspace_root)
    }

    /// Layered options with command line flags applied last.
    pub fn load_options(&self) -> anyhow::Result<GeneratorOptions> {
        let mut options = GeneratorOptions::load(self.config.as_deref())?;
        if let Some(root) = &self.cuda_root {
            options.cuda_root = Some(root.clone());
        }
        if let Some(style) = self.enum_style {
            options.enum_style = style;
        }
        if self.doc_comments {
            options.doc_comments = true;
        }
        Ok(options)
    }
}
