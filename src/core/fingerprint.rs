//! Per-request fingerprint headers.
//!
//! The mobile strategy sends a fixed device fingerprint; browser-flavored
//! strategies rotate user agents and matching brand/platform hints from a
//! small catalog on every request.

use rand::seq::SliceRandom;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderName, HeaderValue, PRAGMA, REFERER,
    USER_AGENT,
};

use crate::core::client::constants::{
    CHROME_BUILDS, MOBILE_APP_ID, MOBILE_USER_AGENT, SEC_CH_UA, SEC_CH_UA_PLATFORMS, USER_AGENTS,
};

fn insert_str(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    // Skip values that don't survive header encoding rather than failing the
    // whole request over a malformed cookie or token.
    if let Ok(v) = HeaderValue::from_str(value) {
        headers.insert(name, v);
    }
}

fn header(name: &'static str) -> HeaderName {
    HeaderName::from_static(name)
}

fn rotate_fingerprint(headers: &mut HeaderMap) {
    let mut rng = rand::thread_rng();
    insert_str(headers, header("sec-ch-ua"), SEC_CH_UA.choose(&mut rng).unwrap_or(&SEC_CH_UA[0]));
    insert_str(
        headers,
        header("sec-ch-ua-platform"),
        SEC_CH_UA_PLATFORMS.choose(&mut rng).unwrap_or(&SEC_CH_UA_PLATFORMS[0]),
    );
    headers.insert(header("sec-ch-ua-mobile"), HeaderValue::from_static("?0"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
}

/// Fixed device fingerprint for the mobile-API strategy. No cookies, no
/// referer: the native client sends neither.
pub(crate) fn mobile_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
    headers.insert(header("x-ig-app-id"), HeaderValue::from_static(MOBILE_APP_ID));
    headers.insert(header("x-ig-capabilities"), HeaderValue::from_static("3brTvw=="));
    headers.insert(header("x-ig-connection-type"), HeaderValue::from_static("WIFI"));
    headers.insert(header("x-ig-connection-speed"), HeaderValue::from_static("0kbps"));
    headers.insert(header("x-ig-bandwidth-speed-kbps"), HeaderValue::from_static("0.000"));
    headers.insert(header("x-ig-bandwidth-totalbytes-b"), HeaderValue::from_static("0"));
    headers.insert(header("x-ig-bandwidth-totaltime-ms"), HeaderValue::from_static("0"));
    headers
}

/// XHR fingerprint for the web-API strategy: a desktop Chrome UA drawn from
/// the build catalog plus the usual same-origin markers.
pub(crate) fn api_headers(handle: &str, app_id: &str, csrftoken: Option<&str>) -> HeaderMap {
    let build = {
        let mut rng = rand::thread_rng();
        *CHROME_BUILDS.choose(&mut rng).unwrap_or(&CHROME_BUILDS[0])
    };
    let ua = format!(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/{build} Safari/537.36"
    );

    let mut headers = HeaderMap::new();
    insert_str(&mut headers, USER_AGENT, &ua);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    insert_str(&mut headers, REFERER, &referer_for(handle));
    insert_str(&mut headers, header("x-ig-app-id"), app_id);
    headers.insert(header("dnt"), HeaderValue::from_static("1"));
    headers.insert(header("sec-fetch-site"), HeaderValue::from_static("same-origin"));
    headers.insert(header("sec-fetch-mode"), HeaderValue::from_static("cors"));
    headers.insert(header("x-requested-with"), HeaderValue::from_static("XMLHttpRequest"));
    rotate_fingerprint(&mut headers);
    if let Some(token) = csrftoken {
        insert_str(&mut headers, header("x-csrftoken"), token);
    }
    headers
}

/// Browser fingerprint for the legacy-JSON and HTML strategies, with the UA
/// rotated across the full catalog.
pub(crate) fn browser_headers(
    handle: &str,
    app_id: &str,
    csrftoken: Option<&str>,
    json_request: bool,
) -> HeaderMap {
    let ua = {
        let mut rng = rand::thread_rng();
        *USER_AGENTS.choose(&mut rng).unwrap_or(&USER_AGENTS[0])
    };

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(ua));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    insert_str(&mut headers, REFERER, &referer_for(handle));
    headers.insert(header("dnt"), HeaderValue::from_static("1"));
    headers.insert(header("sec-fetch-site"), HeaderValue::from_static("same-origin"));
    if json_request {
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*; q=0.01"),
        );
        headers.insert(header("sec-fetch-dest"), HeaderValue::from_static("empty"));
        headers.insert(header("sec-fetch-mode"), HeaderValue::from_static("cors"));
        headers.insert(header("x-requested-with"), HeaderValue::from_static("XMLHttpRequest"));
    } else {
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(header("sec-fetch-dest"), HeaderValue::from_static("document"));
        headers.insert(header("sec-fetch-mode"), HeaderValue::from_static("navigate"));
    }
    insert_str(&mut headers, header("x-ig-app-id"), app_id);
    rotate_fingerprint(&mut headers);
    if let Some(token) = csrftoken {
        insert_str(&mut headers, header("x-csrftoken"), token);
    }
    headers
}

fn referer_for(handle: &str) -> String {
    format!("https://www.instagram.com/{handle}/")
}
