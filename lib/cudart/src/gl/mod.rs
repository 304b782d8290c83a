// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! [OpenGL interoperability](https://docs.nvidia.com/cuda/cuda-runtime-api/group__CUDART__OPENGL.html).
//!
//! The interop functions live in `libcudart` next to the rest of the runtime
//! API; the types they share with it come from [`crate::runtime::sys`].

pub mod result;
pub mod safe;
#[allow(warnings)]
pub mod sys;

pub use safe::*;

use std::path::Path;
use std::sync::OnceLock;

use crate::loader::{self, LoadError, OpenError, resolved};

/// The interop function table, loaded on first use.
pub fn lib() -> Result<&'static sys::Lib, LoadError> {
    static LIB: OnceLock<Result<sys::Lib, LoadError>> = OnceLock::new();
    loader::load(&LIB, open)
}

fn open(path: &Path) -> Result<sys::Lib, OpenError> {
    // SAFETY: see crate::runtime::lib
    let lib = unsafe { sys::Lib::new(path)? };
    loader::require_resolved(&resolved![lib;
        cudaGLGetDevices,
        cudaGraphicsGLRegisterBuffer,
        cudaGraphicsGLRegisterImage,
    ])?;
    Ok(lib)
}
