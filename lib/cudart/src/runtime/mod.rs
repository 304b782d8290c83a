// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Wrappers around the [CUDA runtime API](https://docs.nvidia.com/cuda/cuda-runtime-api/index.html).

pub mod result;
pub mod safe;
#[allow(warnings)]
pub mod sys;

pub use safe::*;

use std::path::Path;
use std::sync::OnceLock;

use crate::loader::{self, LoadError, OpenError, resolved};

/// The runtime function table, loaded on first use.
pub fn lib() -> Result<&'static sys::Lib, LoadError> {
    static LIB: OnceLock<Result<sys::Lib, LoadError>> = OnceLock::new();
    loader::load(&LIB, open)
}

/// Open `path`, rejecting it unless it exports everything [`result`] calls.
fn open(path: &Path) -> Result<sys::Lib, OpenError> {
    // SAFETY: libcudart runs no initialization that could violate Rust invariants on load
    let lib = unsafe { sys::Lib::new(path)? };
    loader::require_resolved(&resolved![lib;
        cudaGetErrorName,
        cudaGetErrorString,
        cudaGetDevice,
        cudaSetDevice,
        cudaGetDeviceCount,
        cudaGetDeviceProperties_v2,
        cudaDeviceGetAttribute,
        cudaDeviceSynchronize,
        cudaDeviceReset,
        cudaMemGetInfo,
        cudaOccupancyAvailableDynamicSMemPerBlock,
        cudaOccupancyMaxActiveBlocksPerMultiprocessor,
        cudaOccupancyMaxActiveBlocksPerMultiprocessorWithFlags,
        cudaMalloc,
        cudaFree,
        cudaMemcpy,
        cudaMemset,
        cudaStreamCreateWithFlags,
        cudaStreamDestroy,
        cudaStreamSynchronize,
        cudaStreamQuery,
        cudaGraphicsMapResources,
        cudaGraphicsUnmapResources,
        cudaGraphicsResourceGetMappedPointer,
        cudaGraphicsResourceSetMapFlags,
        cudaGraphicsUnregisterResource,
        cudaRuntimeGetVersion,
        cudaDriverGetVersion,
    ])?;
    Ok(lib)
}
