// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Output style of the generated bindings.
//!
//! Options are layered with figment, lowest priority first:
//!   1. [`GeneratorOptions::default`]
//!   2. a TOML file (`--config` or `CUDART_BINDGEN_CONFIG`)
//!   3. `CUDART_BINDGEN_*` environment variables, e.g. `CUDART_BINDGEN_DOC_COMMENTS=true`
//!
//! Command line flags are applied on top by the binary.

use anyhow::Context as _;
use bindgen::EnumVariation;
use cudart_config::environment_names::bindgen as env_bindgen;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How C enums are represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EnumStyle {
    /// Exhaustive Rust `enum`s
    #[default]
    Rust,
    /// Tuple struct around the integer type
    NewType,
    /// Free-standing constants plus a type alias
    Consts,
    /// Constants inside a module named after the enum
    ModuleConsts,
    /// Tuple struct with bitwise operators
    Bitfield,
}

impl EnumStyle {
    pub fn variation(&self) -> EnumVariation {
        match self {
            EnumStyle::Rust => EnumVariation::Rust {
                non_exhaustive: false,
            },
            EnumStyle::NewType => EnumVariation::NewType {
                is_bitfield: false,
                is_global: false,
            },
            EnumStyle::Consts => EnumVariation::Consts,
            EnumStyle::ModuleConsts => EnumVariation::ModuleConsts,
            EnumStyle::Bitfield => EnumVariation::NewType {
                is_bitfield: true,
                is_global: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub enum_style: EnumStyle,

    /// Keep the C doc comments in the output
    pub doc_comments: bool,

    pub derive_default: bool,
    pub derive_eq: bool,
    pub derive_hash: bool,
    pub derive_ord: bool,

    /// Reference `core` instead of `std` in the generated code
    pub use_core: bool,

    /// Emit a `Lib` struct that resolves symbols with `libloading`
    /// instead of an `extern "C"` block
    pub dynamic_loading: bool,

    pub layout_tests: bool,

    pub rustfmt: bool,

    /// Toolkit root; when unset the toolkit is located from the environment
    pub cuda_root: Option<PathBuf>,

    /// Appended to the clang command line after the include path
    pub extra_clang_args: Vec<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            enum_style: EnumStyle::Rust,
            doc_comments: false,
            derive_default: true,
            derive_eq: true,
            derive_hash: true,
            derive_ord: true,
            use_core: true,
            dynamic_loading: true,
            layout_tests: false,
            rustfmt: true,
            cuda_root: None,
            extra_clang_args: vec![],
        }
    }
}

impl GeneratorOptions {
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(GeneratorOptions::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(env_bindgen::CUDART_BINDGEN_PREFIX).ignore(&["CONFIG"]))
    }

    /// Load options from the layered sources described in the module docs.
    ///
    /// An explicitly named config file must exist.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            anyhow::ensure!(
                path.is_file(),
                "generator config file not found: {}",
                path.display()
            );
        }
        Self::figment(config_file)
            .extract()
            .context("invalid generator configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_match_checked_in_bindings() {
        let options = GeneratorOptions::default();
        assert_eq!(options.enum_style, EnumStyle::Rust);
        assert!(!options.doc_comments);
        assert!(options.derive_default && options.derive_eq);
        assert!(options.derive_hash && options.derive_ord);
        assert!(options.dynamic_loading);
        assert!(options.use_core);
    }

    #[test]
    fn test_load_layers_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bindgen.toml",
                r#"
                enum_style = "module_consts"
                doc_comments = true
                extra_clang_args = ["-DCUDA_FORCE_API_VERSION=12000"]
                "#,
            )?;
            jail.set_env("CUDART_BINDGEN_DOC_COMMENTS", "false");
            jail.set_env("CUDART_BINDGEN_CUDA_ROOT", "/opt/cuda-12.4");

            let options = GeneratorOptions::load(Some(Path::new("bindgen.toml"))).unwrap();
            assert_eq!(options.enum_style, EnumStyle::ModuleConsts);
            assert!(!options.doc_comments);
            assert_eq!(options.cuda_root, Some(PathBuf::from("/opt/cuda-12.4")));
            assert_eq!(
                options.extra_clang_args,
                vec!["-DCUDA_FORCE_API_VERSION=12000"]
            );
            // untouched keys keep their defaults
            assert!(options.derive_hash);
            Ok(())
        });
    }

    #[test]
    fn test_config_path_env_var_is_not_an_option() {
        Jail::expect_with(|jail| {
            jail.set_env("CUDART_BINDGEN_CONFIG", "somewhere.toml");
            let options = GeneratorOptions::load(None).unwrap();
            assert_eq!(options, GeneratorOptions::default());
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = GeneratorOptions::load(Some(Path::new("/definitely/not/here.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_enum_style_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("CUDART_BINDGEN_ENUM_STYLE", "fancy");
            assert!(GeneratorOptions::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_enum_style_variation() {
        assert!(matches!(
            EnumStyle::Bitfield.variation(),
            EnumVariation::NewType {
                is_bitfield: true,
                ..
            }
        ));
        assert!(matches!(
            EnumStyle::Rust.variation(),
            EnumVariation::Rust {
                non_exhaustive: false
            }
        ));
    }
}
