use std::time::Duration;

/// Tuning knobs for the retrieval loop, supplied at client construction and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    /// Minimum pause inserted before a fallback request within one chain run.
    pub min_delay: Duration,
    /// Maximum pause inserted before a fallback request within one chain run.
    pub max_delay: Duration,
    /// Per-request timeout for every network call.
    pub request_timeout: Duration,
    /// How many times a single request is re-sent after a transient
    /// (timeout/connect) failure before it is classified as a timeout.
    pub retries: u32,
    /// Upper bound on proxy attempts before falling back to a direct one.
    pub proxy_retry_limit: u32,
    /// Cooldown applied to an endpoint when it is marked bad.
    pub proxy_cooldown: Duration,
    /// Sleep between consecutive proxy attempts after a failure.
    pub proxy_backoff: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(2500),
            max_delay: Duration::from_millis(6500),
            request_timeout: Duration::from_secs(20),
            retries: 3,
            proxy_retry_limit: 5,
            proxy_cooldown: Duration::from_secs(600),
            proxy_backoff: Duration::from_secs(2),
        }
    }
}
