use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// A source of candidate egress endpoint hostnames, queried when the pool
/// runs dry.
///
/// Implementations must not fail: an unreachable or empty source is reported
/// as an empty list so pool refresh stays non-fatal.
pub trait EndpointListing: Send + Sync {
    /// Fetch fresh candidate hostnames. May return an empty list.
    fn list_candidate_endpoints<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + 'a>>;
}

#[derive(Deserialize)]
struct ListedServer {
    hostname: Option<String>,
}

/// Listing source backed by the public server recommendation endpoint. The
/// response is a JSON array of objects carrying a `hostname` field.
pub struct HttpEndpointListing {
    http: reqwest::Client,
    url: Url,
}

impl HttpEndpointListing {
    pub fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    async fn fetch(&self) -> Vec<String> {
        let resp = match self.http.get(self.url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unable to refresh SOCKS pool");
                return Vec::new();
            }
        };
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "recommendation endpoint rejected pool refresh");
            return Vec::new();
        }
        match resp.json::<Vec<ListedServer>>().await {
            Ok(servers) => {
                let hosts: Vec<String> =
                    servers.into_iter().filter_map(|s| s.hostname).collect();
                debug!(count = hosts.len(), "fetched candidate SOCKS endpoints");
                hosts
            }
            Err(e) => {
                warn!(error = %e, "unparseable recommendation payload");
                Vec::new()
            }
        }
    }
}

impl EndpointListing for HttpEndpointListing {
    fn list_candidate_endpoints<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + 'a>> {
        Box::pin(self.fetch())
    }
}
