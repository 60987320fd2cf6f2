//! Best-effort profile extraction from a raw profile page.
//!
//! Two embedded-JSON marker patterns are probed first; when neither yields a
//! user object, individual fields are pulled straight out of the markup with
//! regexes. The whole layer sits behind the same strategy interface as the
//! structured-JSON strategies so it can be swapped without touching the
//! chain's control logic.

mod unescape;
mod utils;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::model::ProfileRecord;
use super::wire::{non_empty_object, record_from_user};
use unescape::decode_unicode_escapes;
use utils::find_matching_brace;

static RE_FOLLOWERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""edge_followed_by"\s*:\s*\{"count"\s*:\s*(\d+)\}"#).expect("followers regex"));
static RE_PIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""profile_pic_url_hd"\s*:\s*"([^"]+)""#).expect("picture regex"));
static RE_FULL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""full_name"\s*:\s*"([^"]*)""#).expect("full name regex"));
static RE_BIO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""biography"\s*:\s*"([^"]*)""#).expect("biography regex"));

/// Extract a profile record from a profile page. Returns `None` when neither
/// the embedded JSON blob nor the field regexes yield at least a non-zero
/// follower count or a picture URL.
pub fn extract_profile(username: &str, html: &str) -> Option<ProfileRecord> {
    if let Some(blob) = extract_json_blob(html)
        && let Some(user) = blob
            .pointer("/entry_data/ProfilePage/0/graphql/user")
            .filter(|u| non_empty_object(u))
    {
        return Some(record_from_user(username, user));
    }

    let followers = RE_FOLLOWERS
        .captures(html)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0);

    let profile_picture_url = RE_PIC
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| decode_url_field(m.as_str()));

    if followers == 0 && profile_picture_url.is_none() {
        return None;
    }

    let full_name = RE_FULL_NAME
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned());

    let biography = RE_BIO
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| decode_text_field(m.as_str()))
        .filter(|b| !b.is_empty());

    Some(ProfileRecord {
        username: username.to_string(),
        full_name,
        biography,
        followers,
        profile_picture_url,
    })
}

/// Backslash-escaped unicode sequences first, HTML entities second: the
/// markup carries JSON-escaped strings inside HTML.
fn decode_text_field(raw: &str) -> String {
    html_escape::decode_html_entities(&decode_unicode_escapes(raw)).into_owned()
}

/// URLs additionally carry double-escaped ampersands that survive both
/// decoding passes as a literal `&`.
fn decode_url_field(raw: &str) -> String {
    decode_text_field(raw).replace("\\u0026", "&")
}

/// Locate and parse the page's embedded JSON data blob. Two marker patterns
/// are probed in order; a blob that fails to parse yields `None`.
fn extract_json_blob(html: &str) -> Option<Value> {
    let raw = additional_data_payload(html).or_else(|| shared_data_payload(html))?;
    serde_json::from_str(raw).ok()
}

fn additional_data_payload(html: &str) -> Option<&str> {
    const MARKER: &str = "window.__additionalDataLoaded('feed',";
    let start = html.find(MARKER)? + MARKER.len();
    balanced_object_at(html, start)
}

fn shared_data_payload(html: &str) -> Option<&str> {
    const MARKER: &str = "window._sharedData";
    let marker_end = html.find(MARKER)? + MARKER.len();
    let eq = html[marker_end..].find('=')? + marker_end + 1;
    balanced_object_at(html, eq)
}

/// The brace-balanced object starting at the first non-whitespace character
/// at or after `from`.
fn balanced_object_at(html: &str, from: usize) -> Option<&str> {
    let rest = &html[from..];
    let offset = rest.find(|c: char| !c.is_whitespace())?;
    let obj_start = from + offset;
    if html.as_bytes().get(obj_start).copied()? != b'{' {
        return None;
    }
    let obj_end = find_matching_brace(html, obj_start)?;
    Some(&html[obj_start..=obj_end])
}
