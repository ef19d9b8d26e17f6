//! Application settings lookup.
//!
//! # Design Decisions
//! - Values are trimmed before they are handed out
//! - A blank value (empty or whitespace only) counts as missing
//! - Lookups never fail; callers choose the fallback

use std::collections::BTreeMap;

/// Read-only view over the `[app_settings]` table.
#[derive(Debug, Clone, Copy)]
pub struct AppSettings<'a> {
    values: &'a BTreeMap<String, String>,
}

impl<'a> AppSettings<'a> {
    pub fn new(values: &'a BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Trimmed value of `name`, or `""` when missing.
    pub fn param(&self, name: &str) -> String {
        self.param_or(name, "")
    }

    /// Trimmed value of `name`, or `default` when missing or blank.
    pub fn param_or(&self, name: &str, default: &str) -> String {
        match self.values.get(name).map(|v| v.trim()) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                tracing::trace!(param = %name, "Setting missing, using default");
                default.to_string()
            }
        }
    }

    /// Whether `name` has a non-blank value.
    pub fn contains(&self, name: &str) -> bool {
        self.values
            .get(name)
            .is_some_and(|v| !v.trim().is_empty())
    }
}
