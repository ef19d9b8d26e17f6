//! Physical path to application URL path.

/// Convert a file path under `physical_root` into an app-relative URL path.
///
/// Every occurrence of `physical_root` becomes `/`, then every `\` becomes
/// `/`. The file is expected to live inside the application folder; other
/// paths only get their separators normalized. An empty root matches
/// nothing.
pub fn absolute_path(physical_path: &str, physical_root: &str) -> String {
    let stripped = if physical_root.is_empty() {
        physical_path.to_string()
    } else {
        physical_path.replace(physical_root, "/")
    };
    stripped.replace('\\', "/")
}
