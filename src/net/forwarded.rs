//! Proxy forwarding header conventions.
//!
//! # Responsibilities
//! - Name the headers proxies use to carry the originating client address
//! - Fix the order in which they are trusted
//!
//! # Design Decisions
//! - Compile-time constant, never mutated
//! - `Forwarded` appears twice; the second entry is never reached but is kept
//!   so the list mirrors the convention set it was built from
//! - `Client-IP` and `Client_IP` are both listed since hosts disagree on the
//!   separator

/// Forwarding headers, highest priority first.
pub const FORWARDED_HEADERS: [&str; 15] = [
    "X-Forwarded-For",
    "Forwarded",
    "Forwarded-For",
    "Client-IP",
    "Client_IP",
    "Forwarded",
    "X-Forwarded",
    "X-Coming-From",
    "X-Real-IP",
    "Via",
    "Coming-From",
    "From",
    "Proxy-Connection",
    "X-Cluster-Client-IP",
    "True-Client-IP",
];

/// Server variable holding the address of the directly connected peer.
pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
