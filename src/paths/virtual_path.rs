//! Virtual (application-root-relative) paths.
//!
//! # Responsibilities
//! - Rewrite `~/` markers in arbitrary text to the absolute app root
//! - Compute the containing directory of a virtual path
//!
//! # Design Decisions
//! - `%7E/` is rewritten too; Markdown renderers percent-encode `~` in links
//! - Only the upper-case `%7E` form is recognized

use std::fmt;

/// Marker for the application root.
pub const VIRTUAL_ROOT: &str = "~/";

/// Percent-encoded form of [`VIRTUAL_ROOT`].
pub const ENCODED_VIRTUAL_ROOT: &str = "%7E/";

/// Absolute URL path the application is mounted at.
///
/// Always starts and ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppRoot(String);

impl AppRoot {
    /// Normalize a mount path into an app root.
    ///
    /// `""` becomes `/`, `app` and `/app` become `/app/`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let path = path.as_ref().trim();
        let mut root = String::with_capacity(path.len() + 2);
        if !path.starts_with('/') {
            root.push('/');
        }
        root.push_str(path);
        if !root.ends_with('/') {
            root.push('/');
        }
        Self(root)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace every virtual root marker in `content` with this root.
    pub fn transform(&self, content: &str) -> String {
        transform_virtual_paths(content, self.as_str())
    }
}

impl Default for AppRoot {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for AppRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Replace all `~/` and then all `%7E/` occurrences with `app_root`.
pub fn transform_virtual_paths(content: &str, app_root: &str) -> String {
    content
        .replace(VIRTUAL_ROOT, app_root)
        .replace(ENCODED_VIRTUAL_ROOT, app_root)
}

/// Directory containing the file at `virtual_path`, with a trailing slash.
///
/// A path without any `/` lives in the root, so `/` is returned. A path that
/// already ends with `/` is a directory and comes back unchanged.
pub fn containing_dir(virtual_path: &str) -> &str {
    match virtual_path.rfind('/') {
        None => "/",
        Some(pos) => &virtual_path[..=pos],
    }
}
