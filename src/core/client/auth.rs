//! Session cookie bag: persistence, header rendering, and validation.
//!
//! The headless login flow that produces these cookies lives outside this
//! crate; here they are an opaque credential bag consumed at request time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::error::IgError;
use crate::core::{fingerprint, net};

/// Handle probed when checking whether a session is still usable.
const COOKIE_VALIDATION_HANDLE: &str = "instagram";

/// The session cookies a logged-in browser would hold. All optional; an
/// empty bag simply means anonymous requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionCookies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessionid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrftoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_user_id: Option<String>,
}

impl SessionCookies {
    pub fn is_empty(&self) -> bool {
        self.sessionid.is_none() && self.csrftoken.is_none() && self.ds_user_id.is_none()
    }

    /// Read the bag from a JSON file, keeping only the known keys. A missing
    /// or corrupted file yields an empty bag.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Self>(&text) {
            Ok(mut cookies) => {
                cookies.drop_blanks();
                cookies
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupted cookie file, ignoring");
                Self::default()
            }
        }
    }

    /// Persist the bag as JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IgError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload =
            serde_json::to_string(self).map_err(|e| IgError::Data(format!("cookie encode: {e}")))?;
        std::fs::write(path, payload)?;
        info!(path = %path.display(), "persisted session cookies");
        Ok(())
    }

    /// Render the bag as a `Cookie` header value. Whenever any cookie is
    /// present, `ig_nrcb=1` is appended the way a consenting browser would.
    pub(crate) fn header_value(&self) -> Option<String> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.sessionid {
            pairs.push(format!("sessionid={v}"));
        }
        if let Some(v) = &self.csrftoken {
            pairs.push(format!("csrftoken={v}"));
        }
        if let Some(v) = &self.ds_user_id {
            pairs.push(format!("ds_user_id={v}"));
        }
        if pairs.is_empty() {
            return None;
        }
        pairs.push("ig_nrcb=1".into());
        Some(pairs.join("; "))
    }

    fn drop_blanks(&mut self) {
        for slot in [&mut self.sessionid, &mut self.csrftoken, &mut self.ds_user_id] {
            if slot.as_deref().is_some_and(str::is_empty) {
                *slot = None;
            }
        }
    }
}

impl super::IgClient {
    /// Probe the mobile profile endpoint with the configured cookies and
    /// report whether the session is usable. Never fails hard: any error is
    /// an unusable session.
    pub async fn validate_session(&self) -> bool {
        if self.cookies().sessionid.is_none() {
            return false;
        }

        let mut url = self.base_mobile_api().clone();
        url.query_pairs_mut()
            .append_pair("username", COOKIE_VALIDATION_HANDLE);

        let mut req = self.http().get(url).headers(fingerprint::mobile_headers());
        if let Some(cookie) = self.cookies().header_value() {
            req = req.header(reqwest::header::COOKIE, cookie);
        }

        match net::send_with_retry(req, 0).await {
            Ok(resp) if resp.status == 200 => serde_json::from_str::<Value>(&resp.body)
                .ok()
                .and_then(|v| v.pointer("/data/user").cloned())
                .is_some_and(|u| u.as_object().is_some_and(|o| !o.is_empty())),
            Ok(resp) => {
                debug!(status = resp.status, "session validation probe rejected");
                false
            }
            Err(e) => {
                debug!(error = %e, "session validation probe failed");
                false
            }
        }
    }
}
