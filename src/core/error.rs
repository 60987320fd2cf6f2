use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IgError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A filesystem operation failed (snapshot store).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile does not exist, is private, or no strategy could extract
    /// usable data from it.
    #[error("profile not found: {0}")]
    NotFound(String),

    /// The platform answered with HTTP 429. Terminal: never retried across
    /// proxies, since it reflects server-side request state.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// A request timed out or failed to connect/resolve. Absorbed by the
    /// proxy retry loop; only surfaces directly from a proxy-less attempt.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The data received was in an unexpected format or was missing a
    /// required field.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),

    /// Every proxy attempt and the direct attempt failed. Carries one reason
    /// per failed attempt for diagnostics.
    #[error("scraping failed after exhausting all attempts: {}", reasons.join(", "))]
    Runtime {
        /// One entry per failed attempt, proxy and direct.
        reasons: Vec<String>,
    },
}
