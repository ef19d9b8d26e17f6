//! Axum integration for client address resolution.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::http::variables::RequestVariables;
use crate::net::client_addr::ClientAddressResolver;

/// Originating client address of the current request.
///
/// Uses the `ClientAddressResolver` found in the request extensions when a
/// host layer installed one, and the built-in header list otherwise. The
/// peer address comes from `ConnectInfo<SocketAddr>`, so serve the router
/// with `into_make_service_with_connect_info::<SocketAddr>()` to get a
/// fallback value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddress(pub String);

impl<S> FromRequestParts<S> for ClientAddress
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        let address = match parts.extensions.get::<ClientAddressResolver>() {
            Some(resolver) => {
                let vars = RequestVariables::new(&parts.headers, peer)
                    .with_remote_addr_variable(resolver.remote_addr_variable());
                resolver.resolve(&vars)
            }
            None => ClientAddressResolver::default().resolve(&RequestVariables::new(&parts.headers, peer)),
        };

        Ok(ClientAddress(address))
    }
}
