// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! A thin wrapper around [sys] returning [`crate::Result`]s.
//!
//! Every call goes through [`super::lib`], so a missing `libcudart` surfaces
//! as [`crate::Error::Load`] and a failing call as [`crate::Error::Runtime`].

use super::{lib, sys};
use crate::loader::LoadError;
use core::ffi::CStr;

/// Wrapper around [`sys::cudaError_t`] for any status other than `cudaSuccess`.
///
/// See [cudaError_t docs](https://docs.nvidia.com/cuda/cuda-runtime-api/group__CUDART__TYPES.html#group__CUDART__TYPES_1gf599e5b8b829ce7db0f5216928f6ecb6)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CudartError(pub sys::cudaError_t);

impl sys::cudaError_t {
    /// Transforms into a [Result] of [CudartError]
    pub fn result(self) -> Result<(), CudartError> {
        match self {
            sys::cudaError_t::cudaSuccess => Ok(()),
            _ => Err(CudartError(self)),
        }
    }
}

impl CudartError {
    /// The symbolic name of this error, e.g. `cudaErrorInvalidValue`.
    ///
    /// See [cudaGetErrorName() docs](https://docs.nvidia.com/cuda/cuda-runtime-api/group__CUDART__ERROR.html#group__CUDART__ERROR_1gb3de7da2f23736878270026dcfc70075)
    pub fn error_name(&self) -> Result<&'static CStr, LoadError> {
        let lib = lib()?;
        // SAFETY: the runtime returns a pointer to a static NUL terminated string
        unsafe { Ok(CStr::from_ptr(lib.cudaGetErrorName(self.0))) }
    }

    /// The description of this error.
    ///
    /// See [cudaGetErrorString() docs](https://docs.nvidia.com/cuda/cuda-runtime-api/group__CUDART__ERROR.html#group__CUDART__ERROR_1g4bc9e35a618dfd0877c29c8ee45148f1)
    pub fn error_string(&self) -> Result<&'static CStr, LoadError> {
        let lib = lib()?;
        // SAFETY: as above
        unsafe { Ok(CStr::from_ptr(lib.cudaGetErrorString(self.0))) }
    }
}

impl std::fmt::Debug for CudartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tuple = f.debug_tuple("CudartError");
        tuple.field(&self.0);
        if let Ok(err_str) = self.error_string() {
            tuple.field(&err_str);
        }
        tuple.finish()
    }
}

impl std::fmt::Display for CudartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error_string() {
            Ok(desc) => write!(f, "{:?}: {}", self.0, desc.to_string_lossy()),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

impl std::error::Error for CudartError {}

/// Initialization is implicit in the runtime API: the first call into it
/// creates the primary context. Use [device::set] to pick a device first.
///
/// See [programming guide](https://docs.nvidia.com/cuda/cuda-c-programming-guide/index.html#initialization)
pub fn init() {}

pub mod device {
    //! Device management.
    //!
    //! See [cuda docs](https://docs.nvidia.com/cuda/cuda-runtime-api/group__CUDART__DEVICE.html)

    use super::{lib, sys};
    use core::ffi::c_int;
    use std::mem::MaybeUninit;

    /// Device ordinal as used by the runtime API.
    pub type CudartDevice = c_int;

    /// The current device of the calling host thread.
    pub fn get() -> crate::Result<CudartDevice> {
        let lib = lib()?;
        let mut dev: CudartDevice = 0;
        unsafe { lib.cudaGetDevice(&mut dev) }.result()?;
        Ok(dev)
    }

    /// Make `device` current for the calling host thread.
    pub fn set(device: CudartDevice) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaSetDevice(device) }.result()?;
        Ok(())
    }

    /// Number of CUDA capable devices. Fails with `cudaErrorNoDevice` when
    /// there are none.
    pub fn get_count() -> crate::Result<c_int> {
        let lib = lib()?;
        let mut count = MaybeUninit::uninit();
        unsafe {
            lib.cudaGetDeviceCount(count.as_mut_ptr()).result()?;
            Ok(count.assume_init())
        }
    }

    pub fn get_property(device: CudartDevice) -> crate::Result<sys::cudaDeviceProp> {
        let lib = lib()?;
        let mut prop = MaybeUninit::<sys::cudaDeviceProp>::uninit();
        unsafe {
            lib.cudaGetDeviceProperties_v2(prop.as_mut_ptr(), device)
                .result()?;
            Ok(prop.assume_init())
        }
    }

    /// Total global memory in bytes, `get_property(device)?.totalGlobalMem`.
    pub fn total_mem(device: CudartDevice) -> crate::Result<usize> {
        Ok(get_property(device)?.totalGlobalMem)
    }

    pub fn get_attribute(device: CudartDevice, attribute: sys::cudaDeviceAttr) -> crate::Result<i32> {
        let lib = lib()?;
        let mut value = MaybeUninit::uninit();
        unsafe {
            lib.cudaDeviceGetAttribute(value.as_mut_ptr(), attribute, device)
                .result()?;
            Ok(value.assume_init())
        }
    }

    /// Block until the current device has finished all preceding work.
    pub fn synchronize() -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaDeviceSynchronize() }.result()?;
        Ok(())
    }

    /// Destroy all allocations and reset all state of the current device.
    ///
    /// # Safety
    /// Every device pointer, stream and resource of this process becomes invalid.
    pub unsafe fn reset() -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaDeviceReset() }.result()?;
        Ok(())
    }

    /// `(free, total)` memory of the current device in bytes.
    pub fn mem_get_info() -> crate::Result<(usize, usize)> {
        let lib = lib()?;
        let mut free = 0;
        let mut total = 0;
        unsafe { lib.cudaMemGetInfo(&mut free, &mut total) }.result()?;
        Ok((free, total))
    }
}

pub mod occupancy {
    //! Occupancy calculation.
    //!
    //! The `cudaOccupancyMaxPotentialBlockSize*` family is implemented as C++
    //! templates in the headers and has no exported symbol to bind.

    use super::{lib, sys};
    use core::ffi::{c_int, c_uint, c_void};
    use std::mem::MaybeUninit;

    /// Dynamic shared memory available per block when launching `num_blocks`
    /// blocks on a multiprocessor.
    ///
    /// # Safety
    /// `f` must be a valid kernel function.
    pub unsafe fn available_dynamic_shared_mem_per_block(
        f: sys::cudaFunction_t,
        num_blocks: c_int,
        block_size: c_int,
    ) -> crate::Result<usize> {
        let lib = lib()?;
        let mut dynamic_smem_size = MaybeUninit::uninit();
        unsafe {
            lib.cudaOccupancyAvailableDynamicSMemPerBlock(
                dynamic_smem_size.as_mut_ptr(),
                f as *const c_void,
                num_blocks,
                block_size,
            )
            .result()?;
            Ok(dynamic_smem_size.assume_init())
        }
    }

    /// # Safety
    /// `f` must be a valid kernel function.
    pub unsafe fn max_active_block_per_multiprocessor(
        f: sys::cudaFunction_t,
        block_size: c_int,
        dynamic_smem_size: usize,
    ) -> crate::Result<i32> {
        let lib = lib()?;
        let mut num_blocks = MaybeUninit::uninit();
        unsafe {
            lib.cudaOccupancyMaxActiveBlocksPerMultiprocessor(
                num_blocks.as_mut_ptr(),
                f as *const c_void,
                block_size,
                dynamic_smem_size,
            )
            .result()?;
            Ok(num_blocks.assume_init())
        }
    }

    /// # Safety
    /// `f` must be a valid kernel function and `flags` a combination of
    /// `cudaOccupancy*` flags.
    pub unsafe fn max_active_block_per_multiprocessor_with_flags(
        f: sys::cudaFunction_t,
        block_size: c_int,
        dynamic_smem_size: usize,
        flags: c_uint,
    ) -> crate::Result<i32> {
        let lib = lib()?;
        let mut num_blocks = MaybeUninit::uninit();
        unsafe {
            lib.cudaOccupancyMaxActiveBlocksPerMultiprocessorWithFlags(
                num_blocks.as_mut_ptr(),
                f as *const c_void,
                block_size,
                dynamic_smem_size,
                flags,
            )
            .result()?;
            Ok(num_blocks.assume_init())
        }
    }
}

pub mod memory {
    //! Device memory management.

    use super::{lib, sys};
    use core::ffi::{c_int, c_void};
    use std::ptr;

    /// Allocate `size` bytes of device memory.
    ///
    /// # Safety
    /// The returned memory is uninitialized and must be released with [free].
    pub unsafe fn malloc(size: usize) -> crate::Result<*mut c_void> {
        let lib = lib()?;
        let mut dev_ptr = ptr::null_mut();
        unsafe { lib.cudaMalloc(&mut dev_ptr, size) }.result()?;
        Ok(dev_ptr)
    }

    /// # Safety
    /// `dev_ptr` must come from [malloc] and not have been freed.
    pub unsafe fn free(dev_ptr: *mut c_void) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaFree(dev_ptr) }.result()?;
        Ok(())
    }

    /// Copy `src` to device memory at `dst`.
    ///
    /// # Safety
    /// `dst` must point to at least `size_of_val(src)` bytes of device memory.
    pub unsafe fn memcpy_htod<T: Copy>(dst: *mut c_void, src: &[T]) -> crate::Result<()> {
        let lib = lib()?;
        unsafe {
            lib.cudaMemcpy(
                dst,
                src.as_ptr() as *const c_void,
                std::mem::size_of_val(src),
                sys::cudaMemcpyKind::cudaMemcpyHostToDevice,
            )
        }
        .result()?;
        Ok(())
    }

    /// Copy device memory at `src` into `dst`.
    ///
    /// # Safety
    /// `src` must point to at least `size_of_val(dst)` bytes of device memory
    /// holding valid values of `T`.
    pub unsafe fn memcpy_dtoh<T: Copy>(dst: &mut [T], src: *const c_void) -> crate::Result<()> {
        let lib = lib()?;
        unsafe {
            lib.cudaMemcpy(
                dst.as_mut_ptr() as *mut c_void,
                src,
                std::mem::size_of_val(dst),
                sys::cudaMemcpyKind::cudaMemcpyDeviceToHost,
            )
        }
        .result()?;
        Ok(())
    }

    /// Set `size` bytes at `dev_ptr` to `value`.
    ///
    /// # Safety
    /// `dev_ptr` must point to at least `size` bytes of device memory.
    pub unsafe fn memset(dev_ptr: *mut c_void, value: u8, size: usize) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaMemset(dev_ptr, value as c_int, size) }.result()?;
        Ok(())
    }
}

pub mod stream {
    //! Stream management.

    use super::{lib, sys};
    use core::ffi::c_uint;
    use std::ptr;

    /// Create a stream with `cudaStream*` `flags`.
    pub fn create(flags: c_uint) -> crate::Result<sys::cudaStream_t> {
        let lib = lib()?;
        let mut stream = ptr::null_mut();
        unsafe { lib.cudaStreamCreateWithFlags(&mut stream, flags) }.result()?;
        Ok(stream)
    }

    /// # Safety
    /// `stream` must come from [create] and not have been destroyed.
    pub unsafe fn destroy(stream: sys::cudaStream_t) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaStreamDestroy(stream) }.result()?;
        Ok(())
    }

    /// # Safety
    /// `stream` must be a live stream or null for the default stream.
    pub unsafe fn synchronize(stream: sys::cudaStream_t) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaStreamSynchronize(stream) }.result()?;
        Ok(())
    }

    /// Whether all work submitted to `stream` has completed.
    ///
    /// # Safety
    /// `stream` must be a live stream or null for the default stream.
    pub unsafe fn query(stream: sys::cudaStream_t) -> crate::Result<bool> {
        let lib = lib()?;
        match unsafe { lib.cudaStreamQuery(stream) } {
            sys::cudaError_t::cudaErrorNotReady => Ok(false),
            status => {
                status.result()?;
                Ok(true)
            }
        }
    }
}

pub mod graphics {
    //! Graphics interop resources, independent of the graphics API.
    //! Resources are registered through [crate::gl].

    use super::{lib, sys};
    use core::ffi::{c_int, c_uint, c_void};
    use std::ptr;

    /// Map `resources` for access by CUDA, ordered after prior work on `stream`.
    ///
    /// # Safety
    /// Every resource must be registered and currently unmapped.
    pub unsafe fn map(
        resources: &mut [sys::cudaGraphicsResource_t],
        stream: sys::cudaStream_t,
    ) -> crate::Result<()> {
        let lib = lib()?;
        unsafe {
            lib.cudaGraphicsMapResources(resources.len() as c_int, resources.as_mut_ptr(), stream)
        }
        .result()?;
        Ok(())
    }

    /// # Safety
    /// Every resource must be currently mapped.
    pub unsafe fn unmap(
        resources: &mut [sys::cudaGraphicsResource_t],
        stream: sys::cudaStream_t,
    ) -> crate::Result<()> {
        let lib = lib()?;
        unsafe {
            lib.cudaGraphicsUnmapResources(
                resources.len() as c_int,
                resources.as_mut_ptr(),
                stream,
            )
        }
        .result()?;
        Ok(())
    }

    /// Device pointer and size in bytes of a mapped buffer resource.
    ///
    /// # Safety
    /// `resource` must be a mapped buffer resource.
    pub unsafe fn mapped_pointer(
        resource: sys::cudaGraphicsResource_t,
    ) -> crate::Result<(*mut c_void, usize)> {
        let lib = lib()?;
        let mut dev_ptr = ptr::null_mut();
        let mut size = 0;
        unsafe { lib.cudaGraphicsResourceGetMappedPointer(&mut dev_ptr, &mut size, resource) }
            .result()?;
        Ok((dev_ptr, size))
    }

    /// Set how a resource is accessed the next time it is mapped.
    ///
    /// # Safety
    /// `resource` must be registered and currently unmapped.
    pub unsafe fn set_map_flags(
        resource: sys::cudaGraphicsResource_t,
        flags: sys::cudaGraphicsMapFlags,
    ) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaGraphicsResourceSetMapFlags(resource, flags as c_uint) }.result()?;
        Ok(())
    }

    /// # Safety
    /// `resource` must be registered and not used afterwards.
    pub unsafe fn unregister(resource: sys::cudaGraphicsResource_t) -> crate::Result<()> {
        let lib = lib()?;
        unsafe { lib.cudaGraphicsUnregisterResource(resource) }.result()?;
        Ok(())
    }
}

pub mod version {
    //! Versions encoded as `1000 * major + 10 * minor`.

    use super::lib;
    use core::ffi::c_int;

    /// Version of the loaded runtime library.
    pub fn runtime() -> crate::Result<c_int> {
        let lib = lib()?;
        let mut version = 0;
        unsafe { lib.cudaRuntimeGetVersion(&mut version) }.result()?;
        Ok(version)
    }

    /// Latest CUDA version supported by the installed driver, 0 without one.
    pub fn driver() -> crate::Result<c_int> {
        let lib = lib()?;
        let mut version = 0;
        unsafe { lib.cudaDriverGetVersion(&mut version) }.result()?;
        Ok(version)
    }

    /// `(major, minor)` of an encoded version.
    pub fn split(version: c_int) -> (c_int, c_int) {
        (version / 1000, (version % 1000) / 10)
    }
}
