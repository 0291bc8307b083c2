// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Template used when neither `--format` nor `UPTIME_FORMAT` is given.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Resolve instant template: UPTIME_FORMAT > DEFAULT_TIME_FORMAT
pub fn time_format() -> String {
    std::env::var("UPTIME_FORMAT")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
