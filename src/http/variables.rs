//! Per-request server and header variables.
//!
//! # Responsibilities
//! - Define the read-only lookup the resolvers consume
//! - Adapt plain maps and live HTTP requests to that lookup
//!
//! # Design Decisions
//! - Keys are case-sensitive for map sources
//! - HTTP headers are matched the way the protocol matches them (case-insensitive)
//! - A repeated header is exposed as one value joined with ", "

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;

use axum::http::{HeaderMap, HeaderName};

use crate::net::forwarded::REMOTE_ADDR;

/// Read-only key-value view of the variables available for one request.
pub trait RequestVariableSource {
    /// Value of the named variable, if present.
    fn variable(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: RequestVariableSource + ?Sized> RequestVariableSource for &T {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).variable(name)
    }
}

impl RequestVariableSource for HashMap<String, String> {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl RequestVariableSource for BTreeMap<String, String> {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl RequestVariableSource for [(&str, &str)] {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| Cow::Borrowed(*v))
    }
}

impl<const N: usize> RequestVariableSource for [(&str, &str); N] {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().variable(name)
    }
}

/// Variables of a live HTTP request: its headers plus the peer address.
#[derive(Debug, Clone, Copy)]
pub struct RequestVariables<'a> {
    headers: &'a HeaderMap,
    remote_addr: Option<SocketAddr>,
    remote_addr_variable: &'a str,
}

impl<'a> RequestVariables<'a> {
    pub fn new(headers: &'a HeaderMap, remote_addr: Option<SocketAddr>) -> Self {
        Self {
            headers,
            remote_addr,
            remote_addr_variable: REMOTE_ADDR,
        }
    }

    /// Expose the peer address under a different variable name.
    pub fn with_remote_addr_variable(mut self, name: &'a str) -> Self {
        self.remote_addr_variable = name;
        self
    }

    fn header(&self, name: &str) -> Option<Cow<'a, str>> {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        let mut values: Vec<&'a str> = self
            .headers
            .get_all(&name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        match values.len() {
            0 => None,
            1 => values.pop().map(Cow::Borrowed),
            _ => Some(Cow::Owned(values.join(", "))),
        }
    }
}

impl RequestVariableSource for RequestVariables<'_> {
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        if name == self.remote_addr_variable {
            return self.remote_addr.map(|addr| Cow::Owned(addr.ip().to_string()));
        }
        self.header(name)
    }
}
