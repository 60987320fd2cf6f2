//! Request sending and transient-failure classification.

use reqwest::RequestBuilder;
use tracing::debug;

use crate::core::error::IgError;

/// A fully read response: status line plus body text.
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

/// Send a prepared request, re-sending after transient (timeout/connect/DNS)
/// failures up to `retries` extra times. A transient failure that survives
/// the budget is classified as [`IgError::Timeout`]. HTTP statuses are never
/// retried here: terminal and fallback decisions belong to the strategy
/// chain.
pub(crate) async fn send_with_retry(
    builder: RequestBuilder,
    retries: u32,
) -> Result<RawResponse, IgError> {
    let mut last_timeout: Option<IgError> = None;

    for attempt in 0..=retries {
        let req = builder
            .try_clone()
            .ok_or_else(|| IgError::Data("request is not cloneable".into()))?;

        match req.send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                match resp.text().await {
                    Ok(body) => return Ok(RawResponse { status, body }),
                    Err(e) if is_transient(&e) => {
                        debug!(attempt, error = %e, "transient failure while reading body");
                        last_timeout = Some(IgError::Timeout(e.to_string()));
                    }
                    Err(e) => return Err(IgError::Http(e)),
                }
            }
            Err(e) if is_transient(&e) => {
                debug!(attempt, error = %e, "transient request failure");
                last_timeout = Some(IgError::Timeout(e.to_string()));
            }
            Err(e) => return Err(IgError::Http(e)),
        }
    }

    Err(last_timeout.unwrap_or_else(|| IgError::Timeout("request failed".into())))
}
