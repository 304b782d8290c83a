// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Needs libcudart and at least one CUDA device.

#![cfg(feature = "testing-cuda")]

use cudart::runtime::result::{self, CudartError, version};
use cudart::runtime::sys;
use cudart::runtime::{Device, DeviceBuffer, Stream};

#[test]
fn test_library_loads() {
    assert!(cudart::is_available());
    let (major, _) = version::split(version::runtime().unwrap());
    assert!(major >= 11);
    assert!(version::driver().unwrap() >= version::runtime().unwrap());
}

#[test]
fn test_error_strings_come_from_the_runtime() {
    let err = CudartError(sys::cudaError_t::cudaErrorInvalidValue);
    assert_eq!(err.error_name().unwrap().to_str().unwrap(), "cudaErrorInvalidValue");
    assert!(!err.error_string().unwrap().to_bytes().is_empty());
}

#[test]
fn test_device_queries() {
    assert!(Device::count().unwrap() >= 1);
    let device = Device::new(0).unwrap();

    let (major, _) = device.compute_capability().unwrap();
    assert!(major >= 3);
    assert!(!device.name().unwrap().is_empty());

    let (free, total) = device.mem_info().unwrap();
    assert!(free <= total);
    assert_eq!(device.total_mem().unwrap(), device.properties().unwrap().totalGlobalMem);
}

#[test]
fn test_invalid_device_is_rejected() {
    let count = Device::count().unwrap();
    let err = Device::new(count).unwrap_err();
    assert!(matches!(
        err,
        cudart::Error::Runtime(CudartError(sys::cudaError_t::cudaErrorInvalidDevice))
    ));
}

#[test]
fn test_buffer_round_trip() {
    let device = Device::new(0).unwrap();
    let data: Vec<u32> = (0..1024).collect();

    let mut buffer = DeviceBuffer::from_slice(device, &data).unwrap();
    assert_eq!(buffer.to_vec().unwrap(), data);

    let zeros = vec![0u32; 1024];
    buffer.copy_from(&zeros).unwrap();
    assert_eq!(buffer.to_vec().unwrap(), zeros);

    assert!(matches!(
        buffer.copy_from(&data[..10]),
        Err(cudart::Error::LengthMismatch { device: 1024, host: 10 })
    ));
}

#[test]
fn test_zeroed_buffer() {
    let device = Device::new(0).unwrap();
    let buffer = DeviceBuffer::<f32>::zeroed(device, 256).unwrap();
    assert!(buffer.to_vec().unwrap().iter().all(|v| *v == 0.0));
}

#[test]
fn test_stream_lifecycle() {
    let device = Device::new(0).unwrap();
    let stream = Stream::new(device).unwrap();
    stream.synchronize().unwrap();
    assert!(stream.is_idle().unwrap());
}

#[test]
fn test_device_synchronize() {
    result::device::set(0).unwrap();
    result::device::synchronize().unwrap();
    assert_eq!(result::device::get().unwrap(), 0);
}
