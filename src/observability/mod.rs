//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (resolution decisions, config reloads)
//!     → logging.rs (subscriber, filter, stderr output)
//! ```

pub mod logging;

pub use logging::init_logging;
