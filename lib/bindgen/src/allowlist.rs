// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Allow-list filters over symbol names.
//!
//! Patterns are regular expressions anchored at both ends, the same way
//! `bindgen` anchors its `--allowlist-*` arguments, so `cuda.*` selects every
//! name starting with `cuda` and `dim3` selects exactly `dim3`.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{GenerateError, Result};

/// The declaration kinds an allow-list can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Type,
    Function,
    Var,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 3] = [SymbolKind::Type, SymbolKind::Function, SymbolKind::Var];
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SymbolKind::Type => "type",
            SymbolKind::Function => "function",
            SymbolKind::Var => "var",
        };
        write!(f, "{s}")
    }
}

/// Ordered name patterns per [`SymbolKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowList {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    functions: Vec<String>,
    #[serde(default)]
    vars: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn functions<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn vars<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vars.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Patterns for `kind`, in insertion order.
    pub fn patterns(&self, kind: SymbolKind) -> &[String] {
        match kind {
            SymbolKind::Type => &self.types,
            SymbolKind::Function => &self.functions,
            SymbolKind::Var => &self.vars,
        }
    }

    pub fn is_empty(&self) -> bool {
        SymbolKind::ALL.iter().all(|k| self.patterns(*k).is_empty())
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn compile(&self) -> Result<AllowListMatcher> {
        Ok(AllowListMatcher {
            types: compile_set(&self.types)?,
            functions: compile_set(&self.functions)?,
            vars: compile_set(&self.vars)?,
        })
    }
}

fn compile_set(patterns: &[String]) -> Result<RegexSet> {
    let anchored: Vec<String> = patterns.iter().map(|p| anchor(p)).collect();

    // validate one by one so the error names the offending pattern
    for (pattern, anchored) in patterns.iter().zip(&anchored) {
        if let Err(source) = regex::Regex::new(anchored) {
            return Err(GenerateError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            });
        }
    }

    RegexSet::new(&anchored).map_err(|source| GenerateError::InvalidPattern {
        pattern: patterns.join("|"),
        source,
    })
}

fn anchor(pattern: &str) -> String {
    let inner = pattern.strip_prefix('^').unwrap_or(pattern);
    let inner = inner.strip_suffix('$').unwrap_or(inner);
    format!("^(?:{inner})$")
}

/// Compiled form of an [`AllowList`].
#[derive(Debug, Clone)]
pub struct AllowListMatcher {
    types: RegexSet,
    functions: RegexSet,
    vars: RegexSet,
}

impl AllowListMatcher {
    /// A name with no patterns for its kind is never allowed.
    pub fn matches(&self, kind: SymbolKind, name: &str) -> bool {
        let set = match kind {
            SymbolKind::Type => &self.types,
            SymbolKind::Function => &self.functions,
            SymbolKind::Var => &self.vars,
        };
        set.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cuda_allowlist() -> AllowList {
        AllowList::new()
            .types(["cuda.*", "dim3"])
            .functions(["cuda.*"])
            .vars(["^cuda.*$"])
    }

    #[rstest]
    #[case(SymbolKind::Type, "cudaError_t", true)]
    #[case(SymbolKind::Type, "dim3", true)]
    #[case(SymbolKind::Type, "dim3_t", false)]
    #[case(SymbolKind::Type, "CUstream_st", false)]
    #[case(SymbolKind::Function, "cudaMalloc", true)]
    #[case(SymbolKind::Function, "cuMemAlloc_v2", false)]
    #[case(SymbolKind::Function, "dim3", false)]
    #[case(SymbolKind::Var, "cudaStreamNonBlocking", true)]
    #[case(SymbolKind::Var, "CUDART_VERSION", false)]
    fn test_matches(#[case] kind: SymbolKind, #[case] name: &str, #[case] expected: bool) {
        let matcher = cuda_allowlist().compile().unwrap();
        assert_eq!(matcher.matches(kind, name), expected, "{kind} {name}");
    }

    #[test]
    fn test_patterns_are_anchored_both_ends() {
        let matcher = AllowList::new().functions(["cudaGL"]).compile().unwrap();
        assert!(matcher.matches(SymbolKind::Function, "cudaGL"));
        assert!(!matcher.matches(SymbolKind::Function, "cudaGLGetDevices"));
        assert!(!matcher.matches(SymbolKind::Function, "xcudaGL"));
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let matcher = AllowList::new().types(["GL(enum|uint)"]).compile().unwrap();
        assert!(matcher.matches(SymbolKind::Type, "GLenum"));
        assert!(matcher.matches(SymbolKind::Type, "GLuint"));
        assert!(!matcher.matches(SymbolKind::Type, "GLfloat"));
        assert!(!matcher.matches(SymbolKind::Type, "GLuint64"));
    }

    #[test]
    fn test_empty_kind_allows_nothing() {
        let matcher = AllowList::new().functions(["cuda.*"]).compile().unwrap();
        assert!(!matcher.matches(SymbolKind::Type, "cudaError_t"));
        assert!(!matcher.matches(SymbolKind::Var, "cudaEventDefault"));
    }

    #[test]
    fn test_patterns_keep_insertion_order() {
        let list = AllowList::new()
            .types(["b.*"])
            .types(["a.*"])
            .functions(["f"]);
        assert_eq!(list.patterns(SymbolKind::Type), ["b.*", "a.*"]);
        assert_eq!(list.patterns(SymbolKind::Function), ["f"]);
        assert!(list.patterns(SymbolKind::Var).is_empty());
        assert!(!list.is_empty());
        assert!(AllowList::new().is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = AllowList::new()
            .functions(["cuda.*", "cuda(Malloc"])
            .compile()
            .unwrap_err();
        match err {
            GenerateError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "cuda(Malloc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrowing_a_pattern_narrows_the_selection() {
        let wide = AllowList::new().functions(["cuda.*"]).compile().unwrap();
        let narrow = AllowList::new().functions(["cudaGL.*"]).compile().unwrap();

        let names = ["cudaMalloc", "cudaGLGetDevices", "cudaGraphicsGLRegisterBuffer"];
        let selected = |m: &AllowListMatcher| {
            names
                .iter()
                .filter(|n| m.matches(SymbolKind::Function, n))
                .copied()
                .collect::<Vec<_>>()
        };
        assert_eq!(selected(&wide), names);
        assert_eq!(selected(&narrow), ["cudaGLGetDevices"]);
    }
}
