use serde::{Deserialize, Serialize};

/// Public profile metadata for one account, as produced by a retrieval
/// strategy. Immutable once built; downstream layers wrap it rather than
/// mutate it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// The queried handle: lowercase, no leading `@`.
    pub username: String,
    /// Public display name, if any.
    pub full_name: Option<String>,
    /// Biography text; `None` rather than an empty string when blank.
    pub biography: Option<String>,
    /// Follower count; 0 when the source value is absent or non-numeric.
    pub followers: u64,
    /// Direct URL to the profile picture, preferring the high-resolution
    /// variant when both are present.
    pub profile_picture_url: Option<String>,
}
