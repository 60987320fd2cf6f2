//! igscout: resilient Instagram profile metadata retrieval.
//!
//! Fetches public profile data (follower count, display name, biography,
//! profile picture) for a single handle, rotating SOCKS5 egress proxies and
//! falling back through four retrieval strategies (mobile API, web API,
//! legacy JSON endpoint, raw HTML) until one yields usable data. Successful
//! results can be persisted as on-disk snapshots so a later failure can be
//! served from the last known-good state.

pub mod core;
pub mod profile;
pub mod proxy;
pub mod snapshot;

pub use crate::core::client::{IgClient, IgClientBuilder, ProxyAuth, ScrapeConfig, SessionCookies};
pub use crate::core::error::IgError;
pub use crate::profile::ProfileRecord;
pub use crate::proxy::{EndpointListing, HttpEndpointListing, ProxyEndpoint, ProxyPool};
pub use crate::snapshot::{Snapshot, SnapshotStore};
