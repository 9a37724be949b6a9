// ABOUTME: Logging configuration and structured logging setup for the dashboard binary
// ABOUTME: Configures tracing-subscriber with env-filter based level control
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "stride_dashboard=info,stride_intelligence=info,stride_core=info";

/// Initialize structured logging for the binary.
///
/// Honors `RUST_LOG` when set; otherwise logs the workspace crates at info.
/// Safe to call once at startup before any other work.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
