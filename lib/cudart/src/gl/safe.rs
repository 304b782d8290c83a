// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

use core::ffi::c_void;

use super::{result, sys};
use crate::Result;
use crate::runtime::Stream;
use crate::runtime::result::graphics;
use crate::runtime::sys::{cudaGraphicsMapFlags, cudaGraphicsRegisterFlags, cudaGraphicsResource_t};

/// An OpenGL buffer or image registered with CUDA, unregistered on drop.
#[derive(Debug)]
pub struct GraphicsResource {
    resource: cudaGraphicsResource_t,
}

impl GraphicsResource {
    /// # Safety
    /// See [`result::register_buffer`].
    pub unsafe fn register_buffer(
        buffer: sys::GLuint,
        flags: cudaGraphicsRegisterFlags,
    ) -> Result<Self> {
        let resource = unsafe { result::register_buffer(buffer, flags)? };
        Ok(Self { resource })
    }

    /// # Safety
    /// See [`result::register_image`].
    pub unsafe fn register_image(
        image: sys::GLuint,
        target: sys::GLenum,
        flags: cudaGraphicsRegisterFlags,
    ) -> Result<Self> {
        let resource = unsafe { result::register_image(image, target, flags)? };
        Ok(Self { resource })
    }

    pub fn as_raw(&self) -> cudaGraphicsResource_t {
        self.resource
    }

    /// Set how the resource is accessed on the next [`GraphicsResource::map`].
    pub fn set_map_flags(&mut self, flags: cudaGraphicsMapFlags) -> Result<()> {
        // the resource is not mapped: `map` borrows it mutably for the guard's lifetime
        unsafe { graphics::set_map_flags(self.resource, flags) }
    }

    /// Map the resource for CUDA, ordered after prior work on `stream`
    /// (the legacy default stream when `None`). Unmapped when the guard drops.
    pub fn map<'a>(&'a mut self, stream: Option<&'a Stream>) -> Result<MappedResource<'a>> {
        let raw_stream = stream.map_or(std::ptr::null_mut(), Stream::as_raw);
        unsafe { graphics::map(std::slice::from_mut(&mut self.resource), raw_stream)? };
        Ok(MappedResource {
            resource: self,
            stream,
        })
    }
}

impl Drop for GraphicsResource {
    fn drop(&mut self) {
        unsafe {
            if let Err(e) = graphics::unregister(self.resource) {
                tracing::debug!("failed to unregister graphics resource: {e}");
            }
        }
    }
}

/// A mapped [`GraphicsResource`]. OpenGL must not touch it until dropped.
#[derive(Debug)]
pub struct MappedResource<'a> {
    resource: &'a mut GraphicsResource,
    stream: Option<&'a Stream>,
}

impl MappedResource<'_> {
    /// Device pointer and size in bytes of a mapped buffer.
    pub fn pointer(&self) -> Result<(*mut c_void, usize)> {
        unsafe { graphics::mapped_pointer(self.resource.resource) }
    }
}

impl Drop for MappedResource<'_> {
    fn drop(&mut self) {
        let raw_stream = self.stream.map_or(std::ptr::null_mut(), Stream::as_raw);
        unsafe {
            if let Err(e) = graphics::unmap(std::slice::from_mut(&mut self.resource.resource), raw_stream) {
                tracing::debug!("failed to unmap graphics resource: {e}");
            }
        }
    }
}
