//! On-disk persistence of the last known-good profile per handle.
//!
//! One JSON document per handle, plus a best-effort local copy of the
//! profile picture. The serving layer can answer from [`SnapshotStore::latest`]
//! when a fresh scrape fails.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::core::error::IgError;
use crate::profile::ProfileRecord;

/// A persisted scrape result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: ProfileRecord,
    pub scraped_at: DateTime<Utc>,
    /// Local path of the downloaded profile picture, when the download
    /// succeeded.
    pub image_path: Option<PathBuf>,
    /// True when this snapshot was served from disk instead of a fresh
    /// scrape.
    pub cached: bool,
}

/// Directory-backed snapshot store. Images live under `<dir>/images`.
pub struct SnapshotStore {
    dir: PathBuf,
    images_dir: PathBuf,
    http: reqwest::Client,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, IgError> {
        let dir = dir.into();
        let images_dir = dir.join("images");
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            dir,
            images_dir,
            http,
        })
    }

    /// Ensure the storage directories exist.
    pub async fn init(&self) -> Result<(), IgError> {
        tokio::fs::create_dir_all(&self.images_dir).await?;
        Ok(())
    }

    /// Save `profile` as the latest snapshot for its handle, downloading the
    /// profile picture alongside it. The download is best-effort: failures
    /// leave `image_path` empty and never fail the persist.
    pub async fn persist(&self, profile: &ProfileRecord) -> Result<Snapshot, IgError> {
        self.init().await?;
        let scraped_at = Utc::now();

        let image_path = match &profile.profile_picture_url {
            Some(url) => self.download_image(&profile.username, url, scraped_at).await,
            None => None,
        };

        let snapshot = Snapshot {
            profile: profile.clone(),
            scraped_at,
            image_path,
            cached: false,
        };

        let payload = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| IgError::Data(format!("snapshot encode: {e}")))?;
        tokio::fs::write(self.snapshot_path(&profile.username), payload).await?;
        Ok(snapshot)
    }

    /// The most recent snapshot for `handle`, flagged as cached. `None` when
    /// nothing has been persisted yet.
    pub async fn latest(&self, handle: &str) -> Result<Option<Snapshot>, IgError> {
        let path = self.snapshot_path(handle);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(IgError::Io(e)),
        };
        let mut snapshot: Snapshot = serde_json::from_str(&text)
            .map_err(|e| IgError::Data(format!("snapshot decode ({}): {e}", path.display())))?;
        snapshot.cached = true;
        Ok(Some(snapshot))
    }

    fn snapshot_path(&self, handle: &str) -> PathBuf {
        self.dir.join(format!("{handle}.json"))
    }

    /// Fetch and persist the profile image. Picture URLs are signed and
    /// carry query parameters, so the filename is normalized to
    /// `<handle>_<timestamp><ext>`, respecting any extension hint in the URL
    /// path.
    async fn download_image(
        &self,
        handle: &str,
        url: &str,
        scraped_at: DateTime<Utc>,
    ) -> Option<PathBuf> {
        let suffix = Url::parse(url)
            .ok()
            .and_then(|u| {
                Path::new(u.path())
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
            })
            .unwrap_or_else(|| ".jpg".into());
        let filename = format!("{handle}_{}{suffix}", scraped_at.format("%Y%m%d%H%M%S"));
        let destination = self.images_dir.join(filename);

        if tokio::fs::try_exists(&destination).await.unwrap_or(false) {
            return Some(destination);
        }

        let mut content = self.fetch_image(handle, url).await;

        if content.is_none() && !url.contains("unavatar.io") {
            let fallback = format!("https://unavatar.io/instagram/{handle}");
            content = self.fetch_image(handle, &fallback).await;
        }
        if content.is_none() {
            let fallback = format!("https://api.dicebear.com/7.x/initials/png?seed={handle}");
            content = self.fetch_image(handle, &fallback).await;
        }

        let content = content?;
        match tokio::fs::write(&destination, content).await {
            Ok(()) => Some(destination),
            Err(e) => {
                warn!(handle, error = %e, "unable to persist profile image");
                None
            }
        }
    }

    async fn fetch_image(&self, handle: &str, url: &str) -> Option<Vec<u8>> {
        let resp = match self.http.get(url).send().await.and_then(|r| r.error_for_status()) {
            Ok(resp) => resp,
            Err(e) => {
                warn!(handle, url, error = %e, "failed to download profile image");
                return None;
            }
        };
        match resp.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                warn!(handle, url, error = %e, "failed to read profile image body");
                None
            }
        }
    }
}
