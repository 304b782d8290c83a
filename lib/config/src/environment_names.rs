// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Environment variable name constants for centralized management across the workspace
//!
//! ## Organization
//!
//! - **Logging**: log filters and output format of the generator binary
//! - **Toolkit**: location of the CUDA toolkit (names defined by NVIDIA's installers)
//! - **Bindgen**: generator configuration overrides
//! - **Runtime**: how `cudart` finds the shared library at run time

/// Logging environment variables
pub mod logging {
    /// Log filter directives (e.g., "info", "cudart_bindgen=debug")
    pub const CUDART_LOG: &str = "CUDART_LOG";

    /// Enable JSONL logging format
    pub const CUDART_LOGGING_JSONL: &str = "CUDART_LOGGING_JSONL";

    /// Disable ANSI terminal colors in logs
    pub const CUDART_DISABLE_ANSI_LOGGING: &str = "CUDART_DISABLE_ANSI_LOGGING";
}

/// CUDA toolkit location, in lookup order
pub mod toolkit {
    pub const CUDA_PATH: &str = "CUDA_PATH";
    pub const CUDA_HOME: &str = "CUDA_HOME";
    pub const CUDA_ROOT: &str = "CUDA_ROOT";
    pub const CUDA_TOOLKIT_ROOT_DIR: &str = "CUDA_TOOLKIT_ROOT_DIR";

    /// Lookup order used by [`crate::CudaToolkit::locate`]
    pub const LOOKUP_ORDER: [&str; 4] = [CUDA_PATH, CUDA_HOME, CUDA_ROOT, CUDA_TOOLKIT_ROOT_DIR];
}

/// Binding generator environment variables
pub mod bindgen {
    /// Path to a TOML file with generator options
    pub const CUDART_BINDGEN_CONFIG: &str = "CUDART_BINDGEN_CONFIG";

    /// Prefix for per-option overrides, e.g. `CUDART_BINDGEN_DOC_COMMENTS=true`
    pub const CUDART_BINDGEN_PREFIX: &str = "CUDART_BINDGEN_";
}

/// Runtime library loading environment variables
pub mod runtime {
    /// Exact path of the CUDA runtime shared library; disables the search
    pub const CUDART_LIBRARY_PATH: &str = "CUDART_LIBRARY_PATH";
}
