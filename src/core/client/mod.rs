//! Public client surface + builder.
//! Internals are split into `auth` (cookie bag), `config` (tuning knobs) and
//! `constants` (endpoints + fingerprints).

mod auth;
mod config;
pub(crate) mod constants;

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::core::error::IgError;
use crate::proxy::{EndpointListing, HttpEndpointListing, ProxyPool};
use constants::{
    DEFAULT_APP_ID, DEFAULT_BASE_MOBILE_API, DEFAULT_BASE_PROFILE, DEFAULT_BASE_WEB_API,
    DEFAULT_LISTING_URL,
};

pub use auth::SessionCookies;
pub use config::ScrapeConfig;

/// Static SOCKS5 credentials shared by every endpoint in the pool.
#[derive(Clone, Debug)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
    /// SOCKS5 port, 1080 unless overridden.
    pub port: u16,
}

impl ProxyAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            port: 1080,
        }
    }
}

/// The profile retrieval client: owns the direct HTTP client, the endpoint
/// bases, the credential bag, the tuning knobs, and the shared proxy pool.
#[derive(Clone)]
pub struct IgClient {
    http: Client,
    base_mobile_api: Url,
    base_web_api: Url,
    base_profile: Url,
    app_id: String,
    cookies: SessionCookies,
    config: ScrapeConfig,
    proxy_auth: Option<ProxyAuth>,
    pool: Arc<ProxyPool>,
}

impl IgClient {
    /// Create a new builder.
    pub fn builder() -> IgClientBuilder {
        IgClientBuilder::default()
    }

    /// Retrieve the public profile metadata for `username`, rotating through
    /// the proxy pool and the strategy chain as needed.
    pub async fn fetch_profile(&self, username: &str) -> Result<crate::ProfileRecord, IgError> {
        crate::profile::fetch_profile(self, username).await
    }

    /// The shared proxy pool backing this client.
    pub fn proxy_pool(&self) -> &ProxyPool {
        &self.pool
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_mobile_api(&self) -> &Url {
        &self.base_mobile_api
    }
    pub(crate) fn base_web_api(&self) -> &Url {
        &self.base_web_api
    }
    pub(crate) fn base_profile(&self) -> &Url {
        &self.base_profile
    }
    pub(crate) fn app_id(&self) -> &str {
        &self.app_id
    }
    pub(crate) fn cookies(&self) -> &SessionCookies {
        &self.cookies
    }
    pub(crate) fn config(&self) -> &ScrapeConfig {
        &self.config
    }
    pub(crate) fn proxy_auth(&self) -> Option<&ProxyAuth> {
        self.proxy_auth.as_ref()
    }

    /// A fresh client routed through the given SOCKS5 proxy. Built per
    /// attempt; reqwest binds the proxy at client construction.
    pub(crate) fn proxied_http(&self, proxy_url: &str) -> Result<Client, IgError> {
        let client = Client::builder()
            .proxy(reqwest::Proxy::all(proxy_url)?)
            .cookie_store(true)
            .timeout(self.config.request_timeout)
            .build()?;
        Ok(client)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IgClientBuilder {
    base_mobile_api: Option<Url>,
    base_web_api: Option<Url>,
    base_profile: Option<Url>,
    listing_url: Option<Url>,
    app_id: Option<String>,
    cookies: Option<SessionCookies>,
    cookie_file: Option<PathBuf>,
    config: Option<ScrapeConfig>,
    proxy_auth: Option<ProxyAuth>,
    proxy_hosts: Vec<String>,
    listing: Option<Arc<dyn EndpointListing>>,
}

impl IgClientBuilder {
    /// Override the mobile-client profile endpoint.
    pub fn base_mobile_api(mut self, url: Url) -> Self {
        self.base_mobile_api = Some(url);
        self
    }

    /// Override the browser-flavored profile-info endpoint.
    pub fn base_web_api(mut self, url: Url) -> Self {
        self.base_web_api = Some(url);
        self
    }

    /// Override the profile page base (legacy JSON + HTML strategies).
    pub fn base_profile(mut self, url: Url) -> Self {
        self.base_profile = Some(url);
        self
    }

    /// Override the proxy recommendation endpoint.
    pub fn listing_url(mut self, url: Url) -> Self {
        self.listing_url = Some(url);
        self
    }

    /// Override the `X-IG-App-ID` sent on browser-flavored requests.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Provide session cookies directly.
    pub fn cookies(mut self, cookies: SessionCookies) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Load session cookies from a JSON file at build time. Cookies given
    /// via [`IgClientBuilder::cookies`] take precedence.
    pub fn cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_file = Some(path.into());
        self
    }

    /// Replace the default tuning knobs.
    pub fn scrape_config(mut self, config: ScrapeConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// SOCKS5 credentials for the proxy pool. Without them, proxy attempts
    /// are skipped entirely and every fetch goes direct.
    pub fn proxy_auth(mut self, auth: ProxyAuth) -> Self {
        self.proxy_auth = Some(auth);
        self
    }

    /// Seed the proxy pool with known endpoint hostnames.
    pub fn proxy_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proxy_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the endpoint listing source (the refresh backend for the
    /// pool). Defaults to the public recommendation endpoint.
    pub fn endpoint_listing(mut self, listing: Arc<dyn EndpointListing>) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn build(self) -> Result<IgClient, IgError> {
        let base_mobile_api = match self.base_mobile_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MOBILE_API)?,
        };
        let base_web_api = match self.base_web_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_WEB_API)?,
        };
        let base_profile = match self.base_profile {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PROFILE)?,
        };
        let listing_url = match self.listing_url {
            Some(u) => u,
            None => Url::parse_with_params(
                DEFAULT_LISTING_URL,
                [("filters[supported_protocols][0]", "socks"), ("limit", "25")],
            )?,
        };

        let config = self.config.unwrap_or_default();

        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;

        let cookies = match (self.cookies, self.cookie_file) {
            (Some(cookies), _) => cookies,
            (None, Some(path)) => SessionCookies::load(path),
            (None, None) => SessionCookies::default(),
        };

        let listing: Arc<dyn EndpointListing> = match self.listing {
            Some(l) => l,
            None => Arc::new(HttpEndpointListing::new(http.clone(), listing_url)),
        };
        let pool = Arc::new(ProxyPool::new(listing, self.proxy_hosts));

        Ok(IgClient {
            http,
            base_mobile_api,
            base_web_api,
            base_profile,
            app_id: self.app_id.unwrap_or_else(|| DEFAULT_APP_ID.to_string()),
            cookies,
            config,
            proxy_auth: self.proxy_auth,
            pool,
        })
    }
}
