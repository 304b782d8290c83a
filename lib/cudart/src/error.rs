// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::loader::LoadError;
use crate::runtime::result::CudartError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the `safe` layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("CUDA runtime error: {0}")]
    Runtime(#[from] CudartError),

    #[error("length mismatch: device buffer holds {device} elements, host slice {host}")]
    LengthMismatch { device: usize, host: usize },

    #[error("{len} elements of {element_size} bytes overflow the address space")]
    SizeOverflow { len: usize, element_size: usize },
}
