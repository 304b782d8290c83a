// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Owning handles over the runtime API.

use core::ffi::{CStr, c_void};
use std::marker::PhantomData;

use super::result::{self, device::CudartDevice};
use super::sys;
use crate::{Error, Result};

/// A CUDA device, by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Device {
    ordinal: CudartDevice,
}

impl Device {
    /// Number of visible devices. Zero when there is no device or no driver.
    pub fn count() -> Result<usize> {
        match result::device::get_count() {
            Ok(count) => Ok(count as usize),
            Err(Error::Runtime(result::CudartError(
                sys::cudaError_t::cudaErrorNoDevice | sys::cudaError_t::cudaErrorInsufficientDriver,
            ))) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// The device with the given ordinal; fails when it does not exist.
    pub fn new(ordinal: usize) -> Result<Self> {
        let count = Self::count()?;
        if ordinal >= count {
            return Err(Error::Runtime(result::CudartError(
                sys::cudaError_t::cudaErrorInvalidDevice,
            )));
        }
        Ok(Self {
            ordinal: ordinal as CudartDevice,
        })
    }

    /// The device current on the calling thread.
    pub fn current() -> Result<Self> {
        Ok(Self {
            ordinal: result::device::get()?,
        })
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal as usize
    }

    /// Make this device current on the calling thread.
    pub fn bind_to_thread(&self) -> Result<()> {
        result::device::set(self.ordinal)
    }

    pub fn properties(&self) -> Result<sys::cudaDeviceProp> {
        result::device::get_property(self.ordinal)
    }

    pub fn name(&self) -> Result<String> {
        let prop = self.properties()?;
        let bytes: Vec<u8> = prop.name.iter().map(|&c| c as u8).collect();
        Ok(CStr::from_bytes_until_nul(&bytes)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// `(major, minor)` compute capability.
    pub fn compute_capability(&self) -> Result<(i32, i32)> {
        let major = self.attribute(sys::cudaDeviceAttr::cudaDevAttrComputeCapabilityMajor)?;
        let minor = self.attribute(sys::cudaDeviceAttr::cudaDevAttrComputeCapabilityMinor)?;
        Ok((major, minor))
    }

    pub fn attribute(&self, attribute: sys::cudaDeviceAttr) -> Result<i32> {
        result::device::get_attribute(self.ordinal, attribute)
    }

    pub fn total_mem(&self) -> Result<usize> {
        result::device::total_mem(self.ordinal)
    }

    /// `(free, total)` bytes. Binds this device to the calling thread.
    pub fn mem_info(&self) -> Result<(usize, usize)> {
        self.bind_to_thread()?;
        result::device::mem_get_info()
    }

    /// Wait for all work on this device. Binds it to the calling thread.
    pub fn synchronize(&self) -> Result<()> {
        self.bind_to_thread()?;
        result::device::synchronize()
    }
}

/// Device memory holding `len` values of `T`, released on drop.
#[derive(Debug)]
pub struct DeviceBuffer<T: Copy> {
    ptr: *mut c_void,
    len: usize,
    device: Device,
    _marker: PhantomData<T>,
}

// The allocation is plain device memory, not tied to the allocating thread.
unsafe impl<T: Copy + Send> Send for DeviceBuffer<T> {}
unsafe impl<T: Copy + Sync> Sync for DeviceBuffer<T> {}

impl<T: Copy> DeviceBuffer<T> {
    /// Allocate `len` zeroed values on `device`.
    pub fn zeroed(device: Device, len: usize) -> Result<Self> {
        let buffer = Self::uninit(device, len)?;
        if buffer.size() > 0 {
            unsafe { result::memory::memset(buffer.ptr, 0, buffer.size())? };
        }
        Ok(buffer)
    }

    /// Copy `data` to a new allocation on `device`.
    pub fn from_slice(device: Device, data: &[T]) -> Result<Self> {
        let buffer = Self::uninit(device, data.len())?;
        if buffer.size() > 0 {
            unsafe { result::memory::memcpy_htod(buffer.ptr, data)? };
        }
        Ok(buffer)
    }

    fn uninit(device: Device, len: usize) -> Result<Self> {
        let size = byte_size::<T>(len)?;
        device.bind_to_thread()?;
        let ptr = if size == 0 {
            std::ptr::null_mut()
        } else {
            unsafe { result::memory::malloc(size)? }
        };
        Ok(Self {
            ptr,
            len,
            device,
            _marker: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes. Cannot overflow: checked when the buffer was allocated.
    pub fn size(&self) -> usize {
        self.len * std::mem::size_of::<T>()
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// Raw device pointer, null for an empty buffer.
    pub fn as_ptr(&self) -> *const c_void {
        self.ptr
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.ptr
    }

    /// Overwrite the buffer with `data`, which must have the same length.
    pub fn copy_from(&mut self, data: &[T]) -> Result<()> {
        self.check_len(data.len())?;
        if self.size() > 0 {
            self.device.bind_to_thread()?;
            unsafe { result::memory::memcpy_htod(self.ptr, data)? };
        }
        Ok(())
    }

    /// Copy the buffer into `out`, which must have the same length.
    pub fn copy_to(&self, out: &mut [T]) -> Result<()> {
        self.check_len(out.len())?;
        if self.size() > 0 {
            self.device.bind_to_thread()?;
            unsafe { result::memory::memcpy_dtoh(out, self.ptr)? };
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Default,
    {
        let mut out = vec![T::default(); self.len];
        self.copy_to(&mut out)?;
        Ok(out)
    }

    fn check_len(&self, host: usize) -> Result<()> {
        if host != self.len {
            return Err(Error::LengthMismatch {
                device: self.len,
                host,
            });
        }
        Ok(())
    }
}

fn byte_size<T>(len: usize) -> Result<usize> {
    let element_size = std::mem::size_of::<T>();
    len.checked_mul(element_size)
        .ok_or(Error::SizeOverflow { len, element_size })
}

impl<T: Copy> Drop for DeviceBuffer<T> {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        if let Err(e) = self.device.bind_to_thread() {
            tracing::debug!("failed to bind CUDA device for free: {e}");
        }
        unsafe {
            if let Err(e) = result::memory::free(self.ptr) {
                tracing::debug!("failed to free device memory: {e}");
            }
        }
    }
}

/// A non-default stream on a device, destroyed on drop.
#[derive(Debug)]
pub struct Stream {
    stream: sys::cudaStream_t,
    device: Device,
}

unsafe impl Send for Stream {}
unsafe impl Sync for Stream {}

impl Stream {
    /// Create a stream that does not synchronize with the legacy default stream.
    pub fn new(device: Device) -> Result<Self> {
        Self::with_flags(device, sys::cudaStreamNonBlocking)
    }

    pub fn with_flags(device: Device, flags: u32) -> Result<Self> {
        device.bind_to_thread()?;
        let stream = result::stream::create(flags)?;
        Ok(Self { stream, device })
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn as_raw(&self) -> sys::cudaStream_t {
        self.stream
    }

    pub fn synchronize(&self) -> Result<()> {
        unsafe { result::stream::synchronize(self.stream) }
    }

    /// Whether all submitted work has completed.
    pub fn is_idle(&self) -> Result<bool> {
        unsafe { result::stream::query(self.stream) }
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        if let Err(e) = self.device.bind_to_thread() {
            tracing::debug!("failed to bind CUDA device for stream destroy: {e}");
        }
        unsafe {
            if let Err(e) = result::stream::destroy(self.stream) {
                tracing::debug!("failed to destroy CUDA stream: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_accounts_for_element_type() {
        let buffer = DeviceBuffer::<u64> {
            ptr: std::ptr::null_mut(),
            len: 4,
            device: Device { ordinal: 0 },
            _marker: PhantomData,
        };
        assert_eq!(buffer.size(), 32);
        assert!(!buffer.is_empty());

        let err = buffer.check_len(3).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { device: 4, host: 3 }));
        // null pointer: drop does not touch the runtime
    }

    #[test]
    fn test_byte_size_overflow_is_an_error() {
        assert_eq!(byte_size::<u64>(4).unwrap(), 32);
        assert_eq!(byte_size::<u8>(usize::MAX).unwrap(), usize::MAX);
        assert!(matches!(
            byte_size::<u64>(usize::MAX),
            Err(Error::SizeOverflow { len: usize::MAX, element_size: 8 })
        ));
    }

    #[test]
    fn test_oversized_allocation_fails_before_touching_the_device() {
        let err = DeviceBuffer::<u64>::zeroed(Device { ordinal: 0 }, usize::MAX / 2).unwrap_err();
        assert!(matches!(err, Error::SizeOverflow { element_size: 8, .. }));
    }

    #[test]
    fn test_empty_buffer_skips_copies() {
        let mut buffer = DeviceBuffer::<f32> {
            ptr: std::ptr::null_mut(),
            len: 0,
            device: Device { ordinal: 0 },
            _marker: PhantomData,
        };
        assert!(buffer.is_empty());
        buffer.copy_from(&[]).unwrap();
        assert!(buffer.to_vec().unwrap().is_empty());
    }
}
