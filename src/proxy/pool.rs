use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use super::listing::EndpointListing;
use super::ProxyEndpoint;

struct PoolState {
    ring: VecDeque<ProxyEndpoint>,
    // host -> available-again deadline; entries are pruned lazily on read
    cooldowns: HashMap<String, Instant>,
}

impl PoolState {
    /// One full rotation pass: front to back, skipping cooled-down hosts
    /// without removing them from the ring.
    fn select(&mut self) -> Option<ProxyEndpoint> {
        let now = Instant::now();
        for _ in 0..self.ring.len() {
            let endpoint = self.ring.pop_front()?;
            self.ring.push_back(endpoint.clone());

            match self.cooldowns.get(endpoint.host()) {
                Some(&until) if until > now => continue,
                Some(_) => {
                    self.cooldowns.remove(endpoint.host());
                    return Some(endpoint);
                }
                None => return Some(endpoint),
            }
        }
        None
    }
}

/// A rotating pool of egress endpoints with per-endpoint cooldowns.
///
/// Selection, cooldown marking, and refresh all run under one lock so
/// concurrent callers observe a consistent ring.
pub struct ProxyPool {
    listing: Arc<dyn EndpointListing>,
    state: Mutex<PoolState>,
}

impl ProxyPool {
    pub fn new<I, S>(listing: Arc<dyn EndpointListing>, initial_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ring = initial_hosts
            .into_iter()
            .map(|h| ProxyEndpoint::new(h.into()))
            .collect();
        Self {
            listing,
            state: Mutex::new(PoolState {
                ring,
                cooldowns: HashMap::new(),
            }),
        }
    }

    /// The next endpoint whose cooldown has expired, cycling the ring so
    /// repeated calls cover every endpoint before repeating. When a full
    /// scan finds nothing eligible, the pool refreshes itself from the
    /// listing source (shuffled, appended) and retries the selection once.
    pub async fn next_endpoint(&self) -> Option<ProxyEndpoint> {
        let mut state = self.state.lock().await;

        if let Some(endpoint) = state.select() {
            return Some(endpoint);
        }

        // Exhausted: refresh in place. Listing failures surface as an empty
        // candidate list, never an error.
        let mut hosts = self.listing.list_candidate_endpoints().await;
        hosts.shuffle(&mut rand::thread_rng());
        if !hosts.is_empty() {
            info!(count = hosts.len(), "refreshed SOCKS endpoint pool");
            state.ring.extend(hosts.into_iter().map(ProxyEndpoint::new));
        } else {
            debug!("pool refresh produced no candidates");
        }

        state.select()
    }

    /// Exclude `endpoint` from selection until `cooldown` has elapsed.
    /// Repeated marks extend the deadline.
    pub async fn mark_bad(&self, endpoint: &ProxyEndpoint, cooldown: Duration) {
        let mut state = self.state.lock().await;
        state
            .cooldowns
            .insert(endpoint.host().to_string(), Instant::now() + cooldown);
        info!(host = endpoint.host(), cooldown_secs = cooldown.as_secs(), "marked endpoint bad");
    }

    /// Number of endpoints currently in the ring (cooled-down ones included).
    pub async fn len(&self) -> usize {
        self.state.lock().await.ring.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.ring.is_empty()
    }
}
