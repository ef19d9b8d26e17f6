//! HTTP request context.
//!
//! # Data Flow
//! ```text
//! Host application request (headers, ConnectInfo)
//!     → variables.rs (RequestVariables: header + REMOTE_ADDR lookup)
//!     → extract.rs (ClientAddress extractor runs the resolver)
//!     → handler receives the client address
//! ```

pub mod extract;
pub mod variables;

pub use extract::ClientAddress;
pub use variables::{RequestVariableSource, RequestVariables};
