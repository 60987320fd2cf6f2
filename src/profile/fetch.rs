//! The retrieval orchestrator: proxy rotation around the strategy chain.

use std::time::Duration;

use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::core::{IgClient, IgError};
use crate::proxy::ProxyEndpoint;

use super::chain::ChainRun;
use super::model::ProfileRecord;

/// TCP connectivity probe budget for a SOCKS5 endpoint before using it.
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Retrieve `username`'s profile: rotate through viable proxy endpoints up
/// to the configured attempt budget, then fall back to exactly one direct
/// attempt. `NotFound` and `RateLimited` are terminal the moment any attempt
/// reports them; transient and unexpected failures rotate to the next
/// endpoint after marking the current one bad.
#[tracing::instrument(skip(client))]
pub(crate) async fn fetch_profile(
    client: &IgClient,
    username: &str,
) -> Result<ProfileRecord, IgError> {
    let handle = normalize_handle(username);
    if handle.is_empty() {
        return Err(IgError::Data("username must not be empty".into()));
    }

    let cfg = client.config().clone();
    let pool = client.proxy_pool();
    let mut reasons: Vec<String> = Vec::new();

    let mut proxy_attempts = 0u32;
    while proxy_attempts < cfg.proxy_retry_limit {
        let Some(endpoint) = pool.next_endpoint().await else {
            break;
        };
        proxy_attempts += 1;

        // Without credentials there is no way to derive a connection URL for
        // any endpoint, so proxying is off entirely.
        let Some(auth) = client.proxy_auth() else {
            break;
        };

        if !endpoint_reachable(&endpoint, auth.port).await {
            pool.mark_bad(&endpoint, cfg.proxy_cooldown).await;
            continue;
        }

        let proxy_url = endpoint.socks5_url(auth);
        let http = match client.proxied_http(&proxy_url) {
            Ok(http) => http,
            Err(e) => {
                pool.mark_bad(&endpoint, cfg.proxy_cooldown).await;
                reasons.push(format!("Proxy {} unexpected error: {e}", endpoint.host()));
                continue;
            }
        };

        match ChainRun::new(client, &http, &handle).run().await {
            Ok(record) => {
                info!(handle = %handle, proxy = endpoint.host(), "scraped profile via proxy");
                return Ok(record);
            }
            Err(IgError::Timeout(detail)) => {
                warn!(handle = %handle, proxy = endpoint.host(), %detail, "proxy timeout");
                pool.mark_bad(&endpoint, cfg.proxy_cooldown).await;
                reasons.push(format!("Proxy timeout via {}", endpoint.host()));
                tokio::time::sleep(cfg.proxy_backoff).await;
            }
            Err(IgError::RateLimited(msg)) => {
                pool.mark_bad(&endpoint, cfg.proxy_cooldown).await;
                warn!(handle = %handle, proxy = endpoint.host(), "rate limited");
                return Err(IgError::RateLimited(msg));
            }
            Err(e @ IgError::NotFound(_)) => return Err(e),
            Err(e) => {
                pool.mark_bad(&endpoint, cfg.proxy_cooldown).await;
                warn!(handle = %handle, proxy = endpoint.host(), error = %e, "proxy attempt failed");
                reasons.push(format!("Proxy {} unexpected error: {e}", endpoint.host()));
                tokio::time::sleep(cfg.proxy_backoff).await;
            }
        }
    }

    // The direct attempt runs unprobed: the reachability check only ever
    // gates proxy endpoints.
    match ChainRun::new(client, client.http(), &handle).run().await {
        Ok(record) => {
            info!(handle = %handle, "scraped profile via direct connection");
            Ok(record)
        }
        Err(e @ (IgError::NotFound(_) | IgError::RateLimited(_))) => Err(e),
        Err(IgError::Timeout(_)) => {
            reasons.push("Direct connection timeout".into());
            Err(IgError::Runtime { reasons })
        }
        Err(e) => {
            warn!(handle = %handle, error = %e, "unexpected direct scraping failure");
            reasons.push(format!("Direct connection error: {e}"));
            Err(IgError::NotFound(format!(
                "Instagram profile '{handle}' is unavailable or private. {}",
                reasons.join(", ")
            )))
        }
    }
}

fn normalize_handle(username: &str) -> String {
    username.trim().trim_start_matches('@').to_lowercase()
}

async fn endpoint_reachable(endpoint: &ProxyEndpoint, port: u16) -> bool {
    match tokio::time::timeout(
        REACHABILITY_TIMEOUT,
        TcpStream::connect((endpoint.host(), port)),
    )
    .await
    {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            warn!(host = endpoint.host(), error = %e, "SOCKS5 endpoint unreachable");
            false
        }
        Err(_) => {
            warn!(host = endpoint.host(), "SOCKS5 reachability probe timed out");
            false
        }
    }
}
