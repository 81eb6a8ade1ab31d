// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "info,smoothgroups_core=info";

/// Runtime configuration. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Angular tolerance in degrees; `None` keeps the library default.
    pub angle_deg: Option<f32>,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            angle_deg: lookup("SMOOTHGROUPS_ANGLE_DEG").and_then(|v| v.trim().parse().ok()),
            log_json: lookup("SMOOTHGROUPS_LOG_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
