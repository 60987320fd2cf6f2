//! Rotating SOCKS5 egress pool with per-endpoint cooldowns.

mod listing;
mod pool;

pub use listing::{EndpointListing, HttpEndpointListing};
pub use pool::ProxyPool;

use crate::core::client::ProxyAuth;

/// One egress endpoint, identified by hostname. The pool owns the rotation
/// order and cooldown state; this is just the value object handed out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProxyEndpoint {
    host: String,
}

impl ProxyEndpoint {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Derive the SOCKS5 connection URL from this endpoint and the static
    /// pool credentials.
    pub fn socks5_url(&self, auth: &ProxyAuth) -> String {
        format!(
            "socks5://{}:{}@{}:{}",
            auth.username, auth.password, self.host, auth.port
        )
    }
}

impl std::fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.host)
    }
}
