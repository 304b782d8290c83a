// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Logging for the generator binary.
//!
//! Events go to stderr so `--stdout` output stays clean. Logging can take two
//! forms: `READABLE` (default) or `JSONL`, enabled by setting
//! `CUDART_LOGGING_JSONL=1`. Filters come from `CUDART_LOG` using the usual
//! `EnvFilter` directive syntax, e.g. `CUDART_LOG=cudart_bindgen=debug`.

use std::collections::HashMap;
use std::sync::Once;

use cudart_config::env_is_truthy;
use cudart_config::environment_names::logging as env_logging;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log level
const DEFAULT_FILTER_LEVEL: &str = "info";

/// Once instance to ensure the logger is only initialized once
static INIT: Once = Once::new();

#[derive(Debug)]
struct LoggingConfig {
    log_level: String,
    log_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: DEFAULT_FILTER_LEVEL.to_string(),
            // bindgen and clang-sys report every skipped declaration at debug
            log_filters: HashMap::from([
                ("bindgen".to_string(), "warn".to_string()),
                ("clang_sys".to_string(), "warn".to_string()),
            ]),
        }
    }
}

/// Initialize the logger. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        if let Err(e) = setup_logging() {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    });
}

fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter = filters(LoggingConfig::default());

    if env_is_truthy(env_logging::CUDART_LOGGING_JSONL) {
        let l = fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .with_filter(filter);
        tracing_subscriber::registry().with(l).try_init()?;
    } else {
        let l = fmt::layer()
            .with_ansi(!env_is_truthy(env_logging::CUDART_DISABLE_ANSI_LOGGING))
            .event_format(fmt::format().compact())
            .with_writer(std::io::stderr)
            .with_filter(filter);
        tracing_subscriber::registry().with(l).try_init()?;
    }

    Ok(())
}

fn filters(config: LoggingConfig) -> EnvFilter {
    let default_directive = config
        .log_level
        .parse::<Directive>()
        .unwrap_or_else(|_| tracing::level_filters::LevelFilter::INFO.into());

    let mut filter_layer = EnvFilter::builder()
        .with_default_directive(default_directive)
        .with_env_var(env_logging::CUDART_LOG)
        .from_env_lossy();

    let from_env = cudart_config::env_non_empty(env_logging::CUDART_LOG).unwrap_or_default();
    for (module, level) in config.log_filters {
        if names_target(&from_env, &module) {
            continue;
        }
        match format!("{module}={level}").parse::<Directive>() {
            Ok(d) => {
                filter_layer = filter_layer.add_directive(d);
            }
            Err(e) => {
                eprintln!("Failed parsing filter '{level}' for module '{module}': {e}");
            }
        }
    }
    filter_layer
}

/// Whether any directive in `directives` targets `module` or one of its children.
fn names_target(directives: &str, module: &str) -> bool {
    directives.split(',').any(|directive| {
        let target = directive
            .split(['=', '['])
            .next()
            .unwrap_or_default()
            .trim();
        target == module
            || target
                .strip_prefix(module)
                .is_some_and(|rest| rest.starts_with("::"))
    })
}
