// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! A thin wrapper around [sys] returning [`crate::Result`]s.

use super::{lib, sys};
use crate::runtime::sys::{cudaGraphicsRegisterFlags, cudaGraphicsResource_t};
use core::ffi::{c_int, c_uint};
use std::ptr;

/// CUDA devices driving the current OpenGL context.
///
/// `max_devices` bounds the number of ordinals returned.
pub fn get_devices(list: sys::cudaGLDeviceList, max_devices: usize) -> crate::Result<Vec<c_int>> {
    let lib = lib()?;
    let mut count: c_uint = 0;
    let mut devices = vec![0 as c_int; max_devices];
    unsafe {
        lib.cudaGLGetDevices(
            &mut count,
            devices.as_mut_ptr(),
            max_devices as c_uint,
            list,
        )
    }
    .result()?;
    devices.truncate((count as usize).min(max_devices));
    Ok(devices)
}

/// Register an OpenGL buffer object for access by CUDA.
///
/// # Safety
/// `buffer` must name a buffer object of the OpenGL context current on the
/// calling thread.
pub unsafe fn register_buffer(
    buffer: sys::GLuint,
    flags: cudaGraphicsRegisterFlags,
) -> crate::Result<cudaGraphicsResource_t> {
    let lib = lib()?;
    let mut resource = ptr::null_mut();
    unsafe { lib.cudaGraphicsGLRegisterBuffer(&mut resource, buffer, flags as c_uint) }.result()?;
    Ok(resource)
}

/// Register an OpenGL texture or renderbuffer for access by CUDA.
///
/// # Safety
/// `image` must name a texture or renderbuffer of type `target` in the
/// OpenGL context current on the calling thread.
pub unsafe fn register_image(
    image: sys::GLuint,
    target: sys::GLenum,
    flags: cudaGraphicsRegisterFlags,
) -> crate::Result<cudaGraphicsResource_t> {
    let lib = lib()?;
    let mut resource = ptr::null_mut();
    unsafe { lib.cudaGraphicsGLRegisterImage(&mut resource, image, target, flags as c_uint) }
        .result()?;
    Ok(resource)
}
