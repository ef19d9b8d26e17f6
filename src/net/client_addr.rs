//! Originating client address resolution.
//!
//! # Responsibilities
//! - Walk the forwarding headers in priority order
//! - Pick one address out of a comma-separated proxy chain
//! - Fall back to the directly connected peer
//!
//! # Design Decisions
//! - Only the first non-empty header is consulted; lower-priority headers
//!   are ignored even when the winner looks malformed
//! - The LAST entry of a chain is returned. Most proxies append hops, which
//!   makes the first entry the original client; this resolver keeps the
//!   last-entry policy it has always had until the product owner decides
//!   otherwise
//! - Values are returned untrimmed and unparsed
//! - Never fails: no usable data yields an empty string

use crate::config::schema::ClientIpConfig;
use crate::http::variables::RequestVariableSource;
use crate::net::forwarded::{FORWARDED_HEADERS, REMOTE_ADDR};

/// Resolves the best-guess originating IP of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddressResolver {
    headers: Vec<String>,
    remote_addr_variable: String,
}

impl ClientAddressResolver {
    /// Create a resolver over a custom header list.
    pub fn new<I, S>(headers: I, remote_addr_variable: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            remote_addr_variable: remote_addr_variable.into(),
        }
    }

    /// Build a resolver from the `[client_ip]` configuration section.
    pub fn from_config(config: &ClientIpConfig) -> Self {
        match &config.forwarded_headers {
            Some(headers) => Self::new(headers.iter().cloned(), config.remote_addr_variable.clone()),
            None => Self::new(FORWARDED_HEADERS, config.remote_addr_variable.clone()),
        }
    }

    /// Headers consulted, highest priority first.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Variable read when no forwarding header is set.
    pub fn remote_addr_variable(&self) -> &str {
        &self.remote_addr_variable
    }

    /// Return the most plausible originating client address.
    pub fn resolve<S: RequestVariableSource + ?Sized>(&self, source: &S) -> String {
        for header in &self.headers {
            let Some(value) = source.variable(header) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            if let Some(last) = value.rsplit(',').next() {
                tracing::debug!(header = %header, address = %last, "Client address taken from forwarding header");
                return last.to_string();
            }
        }

        let remote = source
            .variable(&self.remote_addr_variable)
            .map(|v| v.into_owned())
            .unwrap_or_default();
        tracing::trace!(address = %remote, "No forwarding header set, using remote address");
        remote
    }
}

impl Default for ClientAddressResolver {
    fn default() -> Self {
        Self::new(FORWARDED_HEADERS, REMOTE_ADDR)
    }
}

/// Resolve with the built-in header list and `REMOTE_ADDR` fallback.
pub fn resolve_client_address<S: RequestVariableSource + ?Sized>(source: &S) -> String {
    ClientAddressResolver::default().resolve(source)
}
