//! Application path helpers.
//!
//! # Data Flow
//! ```text
//! Markup / text with "~/" markers
//!     → virtual_path.rs (rewrite against AppRoot)
//!     → absolute URL paths
//!
//! File on disk under the physical root
//!     → physical.rs (strip root, normalize separators)
//!     → application-relative URL path
//! ```
//!
//! # Design Decisions
//! - Roots are passed in explicitly, never read from an ambient request
//! - Pure string rewriting: no filesystem access, no percent-decoding

pub mod physical;
pub mod virtual_path;

pub use physical::absolute_path;
pub use virtual_path::{containing_dir, transform_virtual_paths, AppRoot};
