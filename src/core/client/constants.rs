//! Centralized constants for default endpoints and request fingerprints.

/// Mobile-client profile endpoint (handle is passed as a query parameter).
pub(crate) const DEFAULT_BASE_MOBILE_API: &str =
    "https://i.instagram.com/api/v1/users/web_profile_info/";

/// Browser-flavored profile-info endpoint (handle as query parameter).
pub(crate) const DEFAULT_BASE_WEB_API: &str =
    "https://www.instagram.com/api/v1/users/web_profile_info/";

/// Profile page base; the legacy JSON endpoint and the HTML fallback both
/// hang off this, and the per-handle referer is derived from it.
pub(crate) const DEFAULT_BASE_PROFILE: &str = "https://www.instagram.com/";

/// Public recommendation endpoint used to refresh the SOCKS5 pool.
pub(crate) const DEFAULT_LISTING_URL: &str = "https://api.nordvpn.com/v1/servers/recommendations";

/// Web application identifier attached as `X-IG-App-ID` on browser requests.
pub(crate) const DEFAULT_APP_ID: &str = "936619743392459";

/// Application identifier the native mobile client sends.
pub(crate) const MOBILE_APP_ID: &str = "567067343352427";

/// Fixed device fingerprint for the mobile-API strategy.
pub(crate) const MOBILE_USER_AGENT: &str = "Instagram 219.0.0.12.117 Android (26/8.0.0; 640dpi; 1440x2560; \
     Google; Pixel 3 XL; Crosshatch; qcom; en_US; 123456789)";

/// Desktop UA catalog rotated per browser-flavored request.
pub(crate) const USER_AGENTS: [&str; 10] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_6_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_2) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.6312.86 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Edg/123.0.2420.65 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_1_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.6312.122 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.128 Safari/537.36",
];

/// Brand hints paired with the UA rotation.
pub(crate) const SEC_CH_UA: [&str; 3] = [
    r#""Chromium";v="124", "Google Chrome";v="124", "Not-A.Brand";v="99""#,
    r#""Chromium";v="122", "Microsoft Edge";v="122", "Not=A?Brand";v="99""#,
    r#""Google Chrome";v="123", "Chromium";v="123", "Not.A/Brand";v="8""#,
];

pub(crate) const SEC_CH_UA_PLATFORMS: [&str; 3] = [r#""Windows""#, r#""macOS""#, r#""Linux""#];

/// Chrome build numbers used for the web-API strategy's UA.
pub(crate) const CHROME_BUILDS: [&str; 3] = ["124.0.6367.118", "123.0.6312.124", "122.0.6261.128"];
