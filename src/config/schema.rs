//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every section is optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::settings::AppSettings;
use crate::net::forwarded::REMOTE_ADDR;

/// Root configuration for the helpers.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HelperConfig {
    /// Application mount points.
    pub paths: PathsConfig,

    /// Free-form application settings (`key = "value"`).
    pub app_settings: BTreeMap<String, String>,

    /// Client address resolution.
    pub client_ip: ClientIpConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl HelperConfig {
    /// Lookup view over `[app_settings]`.
    pub fn settings(&self) -> AppSettings<'_> {
        AppSettings::new(&self.app_settings)
    }
}

/// Where the application lives, on the web and on disk.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Absolute URL path the application is mounted at (e.g. "/blog/").
    pub app_root: String,

    /// Filesystem directory the application is served from.
    pub physical_root: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app_root: "/".to_string(),
            physical_root: String::new(),
        }
    }
}

/// Configuration for extracting the client IP from request variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClientIpConfig {
    /// Replaces the built-in forwarding header list when set.
    pub forwarded_headers: Option<Vec<String>>,

    /// Variable holding the directly connected peer address.
    pub remote_addr_variable: String,
}

impl Default for ClientIpConfig {
    fn default() -> Self {
        Self {
            forwarded_headers: None,
            remote_addr_variable: REMOTE_ADDR.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
