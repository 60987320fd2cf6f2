//! The four-strategy fallback chain.
//!
//! Strategies run strictly in order; each returns a [`StrategyOutcome`] and
//! the chain only moves on when a strategy is inconclusive. Terminal
//! classifications stop the chain immediately.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};
use url::Url;

use crate::core::net::{self, RawResponse};
use crate::core::{IgClient, IgError, fingerprint};

use super::model::ProfileRecord;
use super::{scrape, wire};

const RATE_LIMITED_MSG: &str = "Instagram responded with HTTP 429 Too Many Requests.";

/// Outcome of one strategy attempt.
pub(crate) enum StrategyOutcome {
    Success(ProfileRecord),
    /// Inconclusive; try the next strategy.
    Advance,
    NotFound(String),
    RateLimited(String),
    /// Transport-level timeout/connect failure.
    Transient(String),
    /// Anything else that went wrong; retried like a transient failure but
    /// recorded distinctly by the orchestrator.
    Unexpected(String),
}

#[derive(Clone, Copy)]
enum Strategy {
    MobileApi,
    WebApi,
    LegacyJson,
    Html,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::MobileApi => "mobile API",
            Strategy::WebApi => "web API",
            Strategy::LegacyJson => "legacy JSON",
            Strategy::Html => "HTML parsing",
        })
    }
}

/// One run of the chain, bound to a handle and an HTTP client (proxied or
/// direct).
pub(crate) struct ChainRun<'a> {
    client: &'a IgClient,
    http: &'a Client,
    handle: &'a str,
}

impl<'a> ChainRun<'a> {
    pub(crate) fn new(client: &'a IgClient, http: &'a Client, handle: &'a str) -> Self {
        Self {
            client,
            http,
            handle,
        }
    }

    pub(crate) async fn run(&self) -> Result<ProfileRecord, IgError> {
        const ORDER: [Strategy; 4] = [
            Strategy::MobileApi,
            Strategy::WebApi,
            Strategy::LegacyJson,
            Strategy::Html,
        ];

        for (i, strategy) in ORDER.into_iter().enumerate() {
            if i > 0 {
                info!(handle = self.handle, "falling back to {strategy}");
                self.pace().await;
            }

            let outcome = match strategy {
                Strategy::MobileApi => self.mobile_api().await,
                Strategy::WebApi => self.web_api().await,
                Strategy::LegacyJson => self.legacy_json().await,
                Strategy::Html => self.html().await,
            };

            match outcome {
                StrategyOutcome::Success(record) => return Ok(record),
                StrategyOutcome::Advance => continue,
                StrategyOutcome::NotFound(msg) => return Err(IgError::NotFound(msg)),
                StrategyOutcome::RateLimited(msg) => return Err(IgError::RateLimited(msg)),
                StrategyOutcome::Transient(detail) => {
                    debug!(handle = self.handle, %detail, "transient failure in {strategy}");
                    return Err(IgError::Timeout(format!(
                        "Timeout while scraping '{}'.",
                        self.handle
                    )));
                }
                StrategyOutcome::Unexpected(detail) => return Err(IgError::Data(detail)),
            }
        }

        // The HTML strategy never advances, so the loop always returns; this
        // only documents the chain's terminal default.
        Err(IgError::NotFound(self.unable_msg()))
    }

    /* ---------------------- strategies ---------------------- */

    async fn mobile_api(&self) -> StrategyOutcome {
        let mut url = self.client.base_mobile_api().clone();
        url.query_pairs_mut().append_pair("username", self.handle);

        let req = self.http.get(url).headers(fingerprint::mobile_headers());
        let resp = match self.send(req).await {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        match resp.status {
            404 => StrategyOutcome::NotFound(self.not_found_msg()),
            429 => StrategyOutcome::RateLimited(RATE_LIMITED_MSG.into()),
            200 if !resp.body.trim().is_empty() => self.user_or_advance(&resp.body),
            status => {
                debug!(handle = self.handle, status, "mobile API inconclusive");
                StrategyOutcome::Advance
            }
        }
    }

    async fn web_api(&self) -> StrategyOutcome {
        let mut url = self.client.base_web_api().clone();
        url.query_pairs_mut().append_pair("username", self.handle);

        let headers = fingerprint::api_headers(
            self.handle,
            self.client.app_id(),
            self.client.cookies().csrftoken.as_deref(),
        );
        let resp = match self.send(self.with_cookies(self.http.get(url).headers(headers))).await {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        info!(
            handle = self.handle,
            status = resp.status,
            length = resp.body.len(),
            "web API response"
        );

        match resp.status {
            404 => StrategyOutcome::NotFound(self.not_found_msg()),
            429 => StrategyOutcome::RateLimited(RATE_LIMITED_MSG.into()),
            200 => self.user_or_advance(&resp.body),
            _ => StrategyOutcome::Advance,
        }
    }

    async fn legacy_json(&self) -> StrategyOutcome {
        let mut url = match self.profile_url() {
            Ok(url) => url,
            Err(outcome) => return outcome,
        };
        url.query_pairs_mut()
            .append_pair("__a", "1")
            .append_pair("__d", "dis");

        let headers = fingerprint::browser_headers(
            self.handle,
            self.client.app_id(),
            self.client.cookies().csrftoken.as_deref(),
            true,
        );
        let resp = match self.send(self.with_cookies(self.http.get(url).headers(headers))).await {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        match resp.status {
            404 => StrategyOutcome::NotFound(self.not_found_msg()),
            429 => StrategyOutcome::RateLimited(RATE_LIMITED_MSG.into()),
            status if status >= 400 => StrategyOutcome::Advance,
            _ if resp.body.trim().is_empty() => StrategyOutcome::Advance,
            _ => match wire::user_from_legacy_body(&resp.body) {
                Some(user) => {
                    StrategyOutcome::Success(wire::record_from_user(self.handle, &user))
                }
                None => StrategyOutcome::Advance,
            },
        }
    }

    async fn html(&self) -> StrategyOutcome {
        let url = match self.profile_url() {
            Ok(url) => url,
            Err(outcome) => return outcome,
        };

        let headers = fingerprint::browser_headers(
            self.handle,
            self.client.app_id(),
            self.client.cookies().csrftoken.as_deref(),
            false,
        );
        let resp = match self.send(self.with_cookies(self.http.get(url).headers(headers))).await {
            Ok(resp) => resp,
            Err(outcome) => return outcome,
        };

        match resp.status {
            404 => StrategyOutcome::NotFound(self.not_found_msg()),
            429 => StrategyOutcome::RateLimited(RATE_LIMITED_MSG.into()),
            _ => match scrape::extract_profile(self.handle, &resp.body) {
                Some(record) => StrategyOutcome::Success(record),
                // No further strategy to advance to.
                None => StrategyOutcome::NotFound(self.unable_msg()),
            },
        }
    }

    /* ------------------------ helpers ------------------------ */

    async fn send(&self, req: RequestBuilder) -> Result<RawResponse, StrategyOutcome> {
        match net::send_with_retry(req, self.client.config().retries).await {
            Ok(resp) => Ok(resp),
            Err(IgError::Timeout(detail)) => Err(StrategyOutcome::Transient(detail)),
            Err(e) => Err(StrategyOutcome::Unexpected(e.to_string())),
        }
    }

    fn with_cookies(&self, req: RequestBuilder) -> RequestBuilder {
        match self.client.cookies().header_value() {
            Some(cookie) => req.header(COOKIE, cookie),
            None => req,
        }
    }

    fn user_or_advance(&self, body: &str) -> StrategyOutcome {
        match wire::user_from_api_body(body) {
            Some(user) => StrategyOutcome::Success(wire::record_from_user(self.handle, &user)),
            None => StrategyOutcome::Advance,
        }
    }

    fn profile_url(&self) -> Result<Url, StrategyOutcome> {
        self.client
            .base_profile()
            .join(&format!("{}/", self.handle))
            .map_err(|e| StrategyOutcome::Unexpected(format!("invalid profile URL: {e}")))
    }

    /// Jittered pause before a fallback request, so consecutive requests in
    /// one chain run don't fire at machine cadence.
    async fn pace(&self) {
        let cfg = self.client.config();
        let max = cfg.max_delay.max(cfg.min_delay);
        if max.is_zero() {
            return;
        }
        let min_ms = cfg.min_delay.as_millis() as u64;
        let max_ms = max.as_millis() as u64;
        let wait = rand::thread_rng().gen_range(min_ms..=max_ms);
        tokio::time::sleep(Duration::from_millis(wait)).await;
    }

    fn not_found_msg(&self) -> String {
        format!("Instagram profile '{}' not found.", self.handle)
    }

    fn unable_msg(&self) -> String {
        format!(
            "Unable to extract data from Instagram profile '{}'.",
            self.handle
        )
    }
}
