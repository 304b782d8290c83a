// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Bindings to the CUDA runtime API and its OpenGL interop, in three levels:
//!
//! 1. `sys`: generated by `cudart-bindgen`. Every function is resolved from
//!    `libcudart` at runtime, so nothing links against CUDA at build time.
//! 2. `result`: thin wrappers returning [`Result`]s with
//!    [`runtime::result::CudartError`].
//! 3. `safe`: owning handles that release their resources on drop.
//!
//! The library is located through [`loader`] the first time any function is
//! called; see [`is_available`] to probe for it up front.

mod error;
mod loader;

pub mod runtime;

#[cfg(feature = "gl")]
pub mod gl;

pub use error::{Error, Result};
pub use loader::{LoadError, is_available};
