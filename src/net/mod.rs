//! Client network identity.
//!
//! # Data Flow
//! ```text
//! RequestVariableSource (headers + REMOTE_ADDR)
//!     → forwarded.rs (which headers, in which order)
//!     → client_addr.rs (first non-empty header, last hop of its chain)
//!     → best-guess client address (possibly empty)
//! ```
//!
//! # Design Decisions
//! - Stateless and reentrant; safe from any number of request tasks
//! - No address parsing or trust evaluation, only ordered lookup

pub mod client_addr;
pub mod forwarded;

pub use client_addr::{resolve_client_address, ClientAddressResolver};
pub use forwarded::{FORWARDED_HEADERS, REMOTE_ADDR};
