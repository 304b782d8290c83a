// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end generation against small fixture headers. Needs libclang.

#![cfg(feature = "testing-libclang")]

use cudart_bindgen::{
    AllowList, BindingTarget, GenerateError, Generator, GeneratorOptions, OutputMode,
    OutputStatus, SymbolKind, TargetSpec, verify,
};
use std::path::Path;
use tempfile::TempDir;

const FIXTURE_HEADER: &str = r#"
typedef enum cudaError_enum {
    cudaSuccess = 0,
    cudaErrorInvalidValue = 1,
} cudaError_t;

typedef struct CUstream_st *cudaStream_t;

#define CUDART_VERSION 12020
#define cudaStreamNonBlocking 0x01

cudaError_t cudaGetDeviceCount(int *count);
cudaError_t cudaStreamCreate(cudaStream_t *stream);
cudaError_t cudaGLGetDevices(unsigned int *count, int *devices, unsigned int size);

typedef unsigned long other_size_t;
int other_function(other_size_t n);
"#;

struct Fixture {
    dir: TempDir,
    spec: TargetSpec,
    options: GeneratorOptions,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let include = dir.path().join("cuda").join("include");
    std::fs::create_dir_all(&include).unwrap();
    std::fs::write(include.join("fixture_runtime.h"), FIXTURE_HEADER).unwrap();
    std::fs::write(
        dir.path().join("wrapper.h"),
        "#include \"fixture_runtime.h\"\n",
    )
    .unwrap();

    let spec = TargetSpec::for_target(BindingTarget::Runtime, dir.path())
        .with_header(dir.path().join("wrapper.h"))
        .with_output(dir.path().join("out").join("sys.rs"));
    let options = GeneratorOptions {
        cuda_root: Some(dir.path().join("cuda")),
        rustfmt: false,
        ..Default::default()
    };
    Fixture { dir, spec, options }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_generation_is_deterministic() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());
    let include = generator.include_dir().unwrap();

    let first = generator.generate(&f.spec, &include).unwrap();
    let second = generator.generate(&f.spec, &include).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_output_is_restricted_to_allowlist() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());

    let report = generator.run(&f.spec, OutputMode::Write).unwrap();
    assert_eq!(report.status, OutputStatus::Written);
    assert!(report.count(SymbolKind::Function) >= 3);

    let source = read(&f.spec.output);
    assert!(source.contains("cudaGetDeviceCount"));
    assert!(source.contains("cudaStreamCreate"));
    assert!(source.contains("CUDART_VERSION"));
    assert!(!source.contains("other_function"));
    assert!(!source.contains("other_size_t"));
}

#[test]
fn test_narrower_allowlist_narrows_output() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());
    let include = generator.include_dir().unwrap();

    let full = generator.generate(&f.spec, &include).unwrap();
    let narrow_spec = f.spec.clone().with_allowlist(
        AllowList::new()
            .types(["cuda.*", "CU.*"])
            .functions(["cudaGL.*"])
            .vars(["cudaGL.*"]),
    );
    let narrow = generator.generate(&narrow_spec, &include).unwrap();

    let full = verify::collect_symbols(&full, Some("Lib")).unwrap();
    let narrow = verify::collect_symbols(&narrow, Some("Lib")).unwrap();
    assert!(narrow.len() < full.len());
    assert!(
        narrow
            .iter()
            .filter(|s| s.kind == SymbolKind::Function && !s.name.starts_with("__"))
            .all(|s| s.name.starts_with("cudaGL"))
    );
}

#[test]
fn test_rerun_reports_unchanged_and_check_passes() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());

    generator.run(&f.spec, OutputMode::Write).unwrap();
    let report = generator.run(&f.spec, OutputMode::Write).unwrap();
    assert_eq!(report.status, OutputStatus::Unchanged);

    let report = generator.run(&f.spec, OutputMode::Check).unwrap();
    assert_eq!(report.status, OutputStatus::UpToDate);
}

#[test]
fn test_check_mode_reports_stale_output_and_never_writes() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());
    std::fs::create_dir_all(f.spec.output.parent().unwrap()).unwrap();
    std::fs::write(&f.spec.output, "// stale\n").unwrap();

    let err = generator.run(&f.spec, OutputMode::Check).unwrap_err();
    assert!(matches!(err, GenerateError::Stale(_)));
    assert_eq!(read(&f.spec.output), "// stale\n");
}

#[test]
fn test_missing_header_leaves_existing_output_untouched() {
    let f = fixture();
    let generator = Generator::new(f.options.clone());
    std::fs::create_dir_all(f.spec.output.parent().unwrap()).unwrap();
    std::fs::write(&f.spec.output, "// previous bindings\n").unwrap();

    let spec = f.spec.clone().with_header(f.dir.path().join("absent.h"));
    let err = generator.run(&spec, OutputMode::Write).unwrap_err();
    assert!(matches!(err, GenerateError::HeaderNotFound(_)));
    assert_eq!(read(&f.spec.output), "// previous bindings\n");
}

#[test]
fn test_broken_header_writes_nothing() {
    let f = fixture();
    std::fs::write(
        f.dir.path().join("wrapper.h"),
        "#include \"does_not_exist.h\"\n",
    )
    .unwrap();
    let generator = Generator::new(f.options.clone());

    let err = generator.run(&f.spec, OutputMode::Write).unwrap_err();
    assert!(matches!(err, GenerateError::Bindgen(_)), "{err}");
    assert!(!f.spec.output.exists());
}

/// The checked-in bindings are trimmed, so every declaration in them must be
/// one the installed toolkit still produces.
#[cfg(feature = "testing-cuda")]
#[test]
fn test_checked_in_bindings_are_a_subset_of_fresh_output() {
    let generator = Generator::new(GeneratorOptions::default());
    let include = generator.include_dir().unwrap();
    let root = cudart_bindgen::target::default_workspace_root();
    for target in BindingTarget::all() {
        let spec = TargetSpec::for_target(target, &root);
        let library_name = Some(spec.library_name.as_str());

        let fresh = generator.generate(&spec, &include).unwrap();
        let fresh = verify::collect_symbols(&fresh, library_name).unwrap();
        let checked_in = verify::collect_symbols(&read(&spec.output), library_name).unwrap();

        let stale: Vec<_> = checked_in
            .iter()
            .filter(|s| !fresh.iter().any(|f| f.kind == s.kind && f.name == s.name))
            .collect();
        assert!(stale.is_empty(), "{target}: {stale:?}");
    }
}
