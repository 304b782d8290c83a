// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Configuration utilities shared by the binding generator and the runtime wrappers.
//!
//! - Boolean parsing of environment variables (`CUDART_*` switches).
//! - Centralized environment variable names, see [`environment_names`].
//! - Discovery of the CUDA toolkit installation, see [`CudaToolkit`].

pub mod environment_names;
mod toolkit;

pub use toolkit::{CudaToolkit, DEFAULT_TOOLKIT_ROOT};

// ===== Environment Variable Utilities =====

/// Check if a string is truthy.
///
/// Truthy values: "1", "true", "on", "yes" (case-insensitive)
///
/// Returns `false` for invalid values. Use [`parse_bool`] if you need to error on invalid values.
pub fn is_truthy(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "1" | "true" | "on" | "yes")
}

/// Check if a string is falsey.
///
/// Falsey values: "0", "false", "off", "no" (case-insensitive)
///
/// Returns `false` for invalid values. Use [`parse_bool`] if you need to error on invalid values.
pub fn is_falsey(val: &str) -> bool {
    matches!(val.to_lowercase().as_str(), "0" | "false" | "off" | "no")
}

/// Parse a string as a boolean value, returning an error if invalid.
///
/// # Returns
/// * `Ok(true)` - For truthy values: "1", "true", "on", "yes" (case-insensitive)
/// * `Ok(false)` - For falsey values: "0", "false", "off", "no" (case-insensitive)
/// * `Err(_)` - For any other value
///
/// # Example
/// ```ignore
/// assert_eq!(parse_bool("on")?, true);
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(val: &str) -> anyhow::Result<bool> {
    if is_truthy(val) {
        Ok(true)
    } else if is_falsey(val) {
        Ok(false)
    } else {
        anyhow::bail!(
            "Invalid boolean value: '{}'. Expected one of: true/false, 1/0, on/off, yes/no",
            val
        )
    }
}

/// Check if an environment variable is truthy.
///
/// Returns `false` if the environment variable is not set or is invalid.
pub fn env_is_truthy(env: &str) -> bool {
    match std::env::var(env) {
        Ok(val) => is_truthy(val.as_str()),
        Err(_) => false,
    }
}

/// Check if an environment variable is falsey.
///
/// Returns `false` if the environment variable is not set or is invalid.
pub fn env_is_falsey(env: &str) -> bool {
    match std::env::var(env) {
        Ok(val) => is_falsey(val.as_str()),
        Err(_) => false,
    }
}

/// Parse an environment variable as a boolean, returning an error if invalid.
///
/// * `Ok(Some(_))` - the variable is set to a recognized value
/// * `Ok(None)` - the variable is not set
/// * `Err(_)` - the variable is set to something else
pub fn env_parse_bool(env: &str) -> anyhow::Result<Option<bool>> {
    match std::env::var(env) {
        Ok(val) => parse_bool(&val).map(Some),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => anyhow::bail!("Failed to read environment variable {}: {}", env, e),
    }
}

/// Read a non-empty environment variable.
///
/// Empty values are treated the same as unset ones, which is what shells
/// produce for `export CUDA_PATH=`.
pub fn env_non_empty(env: &str) -> Option<String> {
    std::env::var(env).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1")]
    #[case("true")]
    #[case("True")]
    #[case("ON")]
    #[case("yes")]
    fn test_is_truthy(#[case] val: &str) {
        assert!(is_truthy(val));
        assert!(!is_falsey(val));
    }

    #[rstest]
    #[case("0")]
    #[case("false")]
    #[case("FALSE")]
    #[case("off")]
    #[case("No")]
    fn test_is_falsey(#[case] val: &str) {
        assert!(is_falsey(val));
        assert!(!is_truthy(val));
    }

    #[test]
    fn test_neither_truthy_nor_falsey() {
        for val in ["", "random", "2", "enabled"] {
            assert!(!is_truthy(val));
            assert!(!is_falsey(val));
        }
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("yes").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());

        assert!(parse_bool("").is_err());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_env_helpers_not_set() {
        temp_env::with_var_unset("CUDART_TEST_NOT_SET", || {
            assert!(!env_is_truthy("CUDART_TEST_NOT_SET"));
            assert!(!env_is_falsey("CUDART_TEST_NOT_SET"));
            assert_eq!(env_parse_bool("CUDART_TEST_NOT_SET").unwrap(), None);
            assert_eq!(env_non_empty("CUDART_TEST_NOT_SET"), None);
        });
    }

    #[test]
    fn test_env_helpers_set() {
        temp_env::with_var("CUDART_TEST_FLAG", Some("On"), || {
            assert!(env_is_truthy("CUDART_TEST_FLAG"));
            assert_eq!(env_parse_bool("CUDART_TEST_FLAG").unwrap(), Some(true));
        });
        temp_env::with_var("CUDART_TEST_FLAG", Some("sometimes"), || {
            assert!(env_parse_bool("CUDART_TEST_FLAG").is_err());
        });
    }

    #[test]
    fn test_env_non_empty_ignores_blank() {
        temp_env::with_var("CUDART_TEST_BLANK", Some("  "), || {
            assert_eq!(env_non_empty("CUDART_TEST_BLANK"), None);
        });
    }
}
