//! Static helpers for hosted web applications.
//!
//! - Originating client address behind proxies ([`net`])
//! - Virtual and physical path rewriting ([`paths`])
//! - Application settings with defaults ([`config`])

pub mod config;
pub mod http;
pub mod net;
pub mod observability;
pub mod paths;

pub use config::{AppSettings, HelperConfig};
pub use http::{ClientAddress, RequestVariableSource, RequestVariables};
pub use net::{resolve_client_address, ClientAddressResolver};
pub use paths::{absolute_path, containing_dir, transform_virtual_paths, AppRoot};
