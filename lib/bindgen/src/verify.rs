// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Post-generation check that the emitted symbols respect the allow-list.

use std::collections::{BTreeMap, BTreeSet};
use syn::{File, ForeignItem, Item, UseTree};

use crate::allowlist::{AllowListMatcher, SymbolKind};
use crate::{GenerateError, Result};

/// A declaration found in generated bindings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    /// For constants typed by a generated enum (`consts` enum style), the enum name
    pub owner: Option<String>,
}

impl Symbol {
    fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            owner: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub symbols: Vec<Symbol>,
}

impl VerifyReport {
    pub fn count(&self, kind: SymbolKind) -> usize {
        self.symbols.iter().filter(|s| s.kind == kind).count()
    }

    pub fn counts(&self) -> BTreeMap<SymbolKind, usize> {
        SymbolKind::ALL
            .iter()
            .map(|kind| (*kind, self.count(*kind)))
            .collect()
    }

    pub fn contains(&self, kind: SymbolKind, name: &str) -> bool {
        self.symbols.iter().any(|s| s.kind == kind && s.name == name)
    }
}

/// List every top-level declaration in `source`.
///
/// Fields of the dynamic-loading struct named `library_name` are reported as
/// functions; the struct itself is not reported.
pub fn collect_symbols(source: &str, library_name: Option<&str>) -> Result<Vec<Symbol>> {
    let ast: File = syn::parse_str(source)?;
    let mut symbols = Vec::new();

    for item in &ast.items {
        match item {
            Item::Struct(s) if library_name.is_some_and(|lib| s.ident == lib) => {
                for field in &s.fields {
                    if let Some(ident) = &field.ident {
                        symbols.push(Symbol::new(SymbolKind::Function, ident.to_string()));
                    }
                }
            }
            Item::Struct(s) => symbols.push(Symbol::new(SymbolKind::Type, s.ident.to_string())),
            Item::Enum(e) => symbols.push(Symbol::new(SymbolKind::Type, e.ident.to_string())),
            Item::Union(u) => symbols.push(Symbol::new(SymbolKind::Type, u.ident.to_string())),
            Item::Type(t) => symbols.push(Symbol::new(SymbolKind::Type, t.ident.to_string())),
            // module-consts enum style: the module is the enum, its consts the variants
            Item::Mod(m) => {
                let owner = m.ident.to_string();
                symbols.push(Symbol::new(SymbolKind::Type, owner.clone()));
                for inner in m.content.iter().flat_map(|(_, items)| items) {
                    if let Item::Const(c) = inner {
                        symbols.push(Symbol {
                            kind: SymbolKind::Var,
                            name: c.ident.to_string(),
                            owner: Some(owner.clone()),
                        });
                    }
                }
            }
            Item::Use(u) => collect_renames(&u.tree, &mut symbols),
            // layout tests: `const _: () = { ... };`
            Item::Const(c) if c.ident == "_" => {}
            Item::Const(c) => symbols.push(Symbol {
                kind: SymbolKind::Var,
                name: c.ident.to_string(),
                owner: type_ident(&c.ty),
            }),
            Item::Static(s) => symbols.push(Symbol::new(SymbolKind::Var, s.ident.to_string())),
            Item::Fn(f) => symbols.push(Symbol::new(SymbolKind::Function, f.sig.ident.to_string())),
            Item::ForeignMod(m) => {
                for foreign in &m.items {
                    match foreign {
                        ForeignItem::Fn(f) => {
                            symbols.push(Symbol::new(SymbolKind::Function, f.sig.ident.to_string()))
                        }
                        ForeignItem::Static(s) => {
                            symbols.push(Symbol::new(SymbolKind::Var, s.ident.to_string()))
                        }
                        ForeignItem::Type(t) => {
                            symbols.push(Symbol::new(SymbolKind::Type, t.ident.to_string()))
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    Ok(symbols)
}

/// `pub use self::cudaError as cudaError_t;` declares the alias `cudaError_t`.
fn collect_renames(tree: &UseTree, symbols: &mut Vec<Symbol>) {
    match tree {
        UseTree::Path(path) => collect_renames(&path.tree, symbols),
        UseTree::Rename(rename) => {
            symbols.push(Symbol::new(SymbolKind::Type, rename.rename.to_string()))
        }
        UseTree::Group(group) => {
            for tree in &group.items {
                collect_renames(tree, symbols);
            }
        }
        UseTree::Name(_) | UseTree::Glob(_) => {}
    }
}

fn type_ident(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() && path.path.segments.len() == 1 => {
            path.path.segments.first().map(|s| s.ident.to_string())
        }
        _ => None,
    }
}

/// Helpers bindgen emits on its own: `__BindgenBitfieldUnit`, `_bindgen_ty_1`, ...
fn is_generator_internal(name: &str) -> bool {
    name.starts_with("__") || name.starts_with("_bindgen")
}

/// Check `source` against `matcher`.
///
/// A constant whose type is an allowed type counts as part of that type,
/// which is how the `consts` enum style spells enum variants.
pub fn verify(
    source: &str,
    matcher: &AllowListMatcher,
    library_name: Option<&str>,
) -> Result<VerifyReport> {
    let symbols = collect_symbols(source, library_name)?;

    let disallowed: BTreeSet<String> = symbols
        .iter()
        .filter(|s| !is_generator_internal(&s.name))
        .filter(|s| {
            let owned = s
                .owner
                .as_deref()
                .is_some_and(|owner| matcher.matches(SymbolKind::Type, owner));
            !owned && !matcher.matches(s.kind, &s.name)
        })
        .map(|s| format!("{} {}", s.kind, s.name))
        .collect();

    if !disallowed.is_empty() {
        return Err(GenerateError::DisallowedSymbols(
            disallowed.into_iter().collect(),
        ));
    }

    Ok(VerifyReport {
        symbols: symbols
            .into_iter()
            .filter(|s| !is_generator_internal(&s.name))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AllowList;

    const SAMPLE: &str = r#"
use crate::runtime::sys::*;

pub const CUDART_VERSION: u32 = 12020;
pub const cudaStreamNonBlocking: u32 = 1;
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum cudaError {
    cudaSuccess = 0,
    cudaErrorInvalidValue = 1,
}
pub use self::cudaError as cudaError_t;
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CUstream_st {
    _unused: [u8; 0],
}
pub type cudaStream_t = *mut CUstream_st;
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct __BindgenBitfieldUnit<Storage> {
    storage: Storage,
}
pub struct Lib {
    __library: ::libloading::Library,
    pub cudaGetDevice: Result<
        unsafe extern "C" fn(device: *mut ::core::ffi::c_int) -> cudaError_t,
        ::libloading::Error,
    >,
}
impl Lib {
    pub unsafe fn cudaGetDevice(&self, device: *mut ::core::ffi::c_int) -> cudaError_t {
        (self.cudaGetDevice.as_ref().expect("Expected function, got error."))(device)
    }
}
"#;

    fn runtime_matcher() -> AllowListMatcher {
        AllowList::new()
            .types(["cuda.*", "CU.*"])
            .functions(["cuda.*"])
            .vars(["cuda.*", "CUDART_VERSION"])
            .compile()
            .unwrap()
    }

    #[test]
    fn test_collect_symbols() {
        let symbols = collect_symbols(SAMPLE, Some("Lib")).unwrap();
        let names: Vec<_> = symbols
            .iter()
            .map(|s| (s.kind, s.name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                (SymbolKind::Var, "CUDART_VERSION"),
                (SymbolKind::Var, "cudaStreamNonBlocking"),
                (SymbolKind::Type, "cudaError"),
                (SymbolKind::Type, "cudaError_t"),
                (SymbolKind::Type, "CUstream_st"),
                (SymbolKind::Type, "cudaStream_t"),
                (SymbolKind::Type, "__BindgenBitfieldUnit"),
                (SymbolKind::Function, "__library"),
                (SymbolKind::Function, "cudaGetDevice"),
            ]
        );
    }

    #[test]
    fn test_extern_block_functions() {
        let source = r#"
extern "C" {
    pub fn cudaMalloc(devPtr: *mut *mut ::core::ffi::c_void, size: usize) -> cudaError_t;
    pub static cudaSomeGlobal: u32;
}
"#;
        let symbols = collect_symbols(source, None).unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::new(SymbolKind::Function, "cudaMalloc"),
                Symbol::new(SymbolKind::Var, "cudaSomeGlobal"),
            ]
        );
    }

    #[test]
    fn test_verify_accepts_allowed_source() {
        let report = verify(SAMPLE, &runtime_matcher(), Some("Lib")).unwrap();
        assert_eq!(report.count(SymbolKind::Function), 1);
        assert_eq!(report.count(SymbolKind::Var), 2);
        assert_eq!(report.count(SymbolKind::Type), 4);
        assert!(report.contains(SymbolKind::Type, "cudaError_t"));
        assert!(!report.contains(SymbolKind::Type, "__BindgenBitfieldUnit"));
    }

    #[test]
    fn test_verify_rejects_symbols_outside_prefixes() {
        let source = format!("{SAMPLE}\npub type size_t = ::core::ffi::c_ulong;\npub fn cuInit() {{}}\n");
        let err = verify(&source, &runtime_matcher(), Some("Lib")).unwrap_err();
        match err {
            GenerateError::DisallowedSymbols(names) => {
                assert_eq!(names, vec!["function cuInit", "type size_t"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrower_allowlist_rejects_previously_allowed_symbols() {
        let narrow = AllowList::new()
            .types(["cuda.*", "CU.*"])
            .functions(["cudaGL.*"])
            .vars(["cuda.*", "CUDART_VERSION"])
            .compile()
            .unwrap();
        let err = verify(SAMPLE, &narrow, Some("Lib")).unwrap_err();
        assert!(matches!(err, GenerateError::DisallowedSymbols(names) if names == vec!["function cudaGetDevice"]));
    }

    #[test]
    fn test_consts_enum_style_variants_belong_to_their_enum() {
        let source = r#"
pub const cudaMemcpyKind_cudaMemcpyHostToDevice: cudaMemcpyKind = 1;
pub type cudaMemcpyKind = ::core::ffi::c_uint;
"#;
        let matcher = AllowList::new()
            .types(["cuda.*"])
            .compile()
            .unwrap();
        let report = verify(source, &matcher, None).unwrap();
        assert_eq!(report.count(SymbolKind::Var), 1);
    }

    #[test]
    fn test_module_consts_enum_style() {
        let source = r#"
pub mod cudaGLDeviceList {
    pub type Type = ::core::ffi::c_uint;
    pub const cudaGLDeviceListAll: Type = 1;
}
"#;
        let symbols = collect_symbols(source, None).unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::new(SymbolKind::Type, "cudaGLDeviceList"),
                Symbol {
                    kind: SymbolKind::Var,
                    name: "cudaGLDeviceListAll".to_string(),
                    owner: Some("cudaGLDeviceList".to_string()),
                },
            ]
        );

        let matcher = AllowList::new().types(["cudaGL.*"]).compile().unwrap();
        let report = verify(source, &matcher, None).unwrap();
        assert!(report.contains(SymbolKind::Var, "cudaGLDeviceListAll"));

        let other = AllowList::new().types(["cudaGraphics.*"]).compile().unwrap();
        let err = verify(source, &other, None).unwrap_err();
        assert!(matches!(err, GenerateError::DisallowedSymbols(names)
            if names == vec!["type cudaGLDeviceList", "var cudaGLDeviceListAll"]));
    }

    #[test]
    fn test_layout_test_blocks_are_not_symbols() {
        let source = r#"
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub struct dim3 {
    pub x: ::core::ffi::c_uint,
    pub y: ::core::ffi::c_uint,
    pub z: ::core::ffi::c_uint,
}
#[allow(clippy::unnecessary_operation, clippy::identity_op)]
const _: () = {
    ["Size of dim3"][::core::mem::size_of::<dim3>() - 12usize];
    ["Alignment of dim3"][::core::mem::align_of::<dim3>() - 4usize];
    ["Offset of field: dim3::x"][::core::mem::offset_of!(dim3, x) - 0usize];
};
"#;
        let matcher = AllowList::new().types(["dim3"]).compile().unwrap();
        let report = verify(source, &matcher, None).unwrap();
        assert_eq!(report.symbols, vec![Symbol::new(SymbolKind::Type, "dim3")]);
    }

    #[test]
    fn test_unparsable_source() {
        let err = collect_symbols("pub struct {", None).unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }
}
