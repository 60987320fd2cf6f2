//! Lenient mapping from upstream user payloads to [`ProfileRecord`].
//!
//! The user object arrives in several envelope shapes and with fields that
//! may be absent, null, or mistyped; everything here degrades to defaults
//! instead of failing the strategy.

use serde_json::Value;

use super::model::ProfileRecord;

/// True for a JSON object with at least one field. Empty objects are what
/// the upstream serves for missing users, so they never count as populated.
pub(crate) fn non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|o| !o.is_empty())
}

/// Locate the user object in a mobile/web API body (`data.user`).
pub(crate) fn user_from_api_body(body: &str) -> Option<Value> {
    let payload: Value = serde_json::from_str(body).ok()?;
    payload
        .pointer("/data/user")
        .filter(|u| non_empty_object(u))
        .cloned()
}

/// Locate the user object in a legacy ajax body. Three shapes are probed in
/// fixed priority order: `graphql.user`, `data.user`, `items[0].user`.
pub(crate) fn user_from_legacy_body(body: &str) -> Option<Value> {
    let payload: Value = serde_json::from_str(body).ok()?;
    ["/graphql/user", "/data/user", "/items/0/user"]
        .iter()
        .filter_map(|path| payload.pointer(path))
        .find(|u| non_empty_object(u))
        .cloned()
}

/// Build a record from a user object, applying the uniform normalization
/// rules: follower count defaults to 0, blank biography becomes `None`, and
/// the high-resolution picture field wins over the standard one.
pub(crate) fn record_from_user(username: &str, user: &Value) -> ProfileRecord {
    let followers = user
        .pointer("/edge_followed_by/count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let profile_picture_url = user
        .get("profile_pic_url_hd")
        .and_then(Value::as_str)
        .or_else(|| user.get("profile_pic_url").and_then(Value::as_str))
        .map(str::to_string);

    ProfileRecord {
        username: username.to_string(),
        full_name: user.get("full_name").and_then(Value::as_str).map(str::to_string),
        biography: user
            .get("biography")
            .and_then(Value::as_str)
            .filter(|b| !b.is_empty())
            .map(str::to_string),
        followers,
        profile_picture_url,
    }
}
