// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local-first override store.
//!
//! The local JSON cache file is the source of truth. When a remote store is
//! configured, loads prefer the remote copy (replacing the cache wholesale
//! on success) and writes push the whole collection back after every local
//! save. Remote failures never fail the operation; they are logged and the
//! local result stands.

use crate::error::PersistenceError;
use crate::remote::{RemoteConfig, RemoteStore};
use escala_domain::{OverrideKind, ScheduleOverride};
use rand::distr::{Alphanumeric, SampleString};
use std::path::{Path, PathBuf};
use time::Date;
use tracing::{debug, warn};

const OVERRIDE_ID_LENGTH: usize = 10;

/// Persistent store for schedule overrides.
#[derive(Debug)]
pub struct OverrideStore {
    cache_path: PathBuf,
    remote: Option<RemoteStore>,
}

impl OverrideStore {
    /// Creates a store backed only by the local cache file.
    #[must_use]
    pub fn local_only(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
            remote: None,
        }
    }

    /// Creates a store that syncs the local cache with a remote document
    /// store.
    #[must_use]
    pub fn with_remote(cache_path: impl Into<PathBuf>, config: RemoteConfig) -> Self {
        Self {
            cache_path: cache_path.into(),
            remote: Some(RemoteStore::new(config)),
        }
    }

    #[must_use]
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Loads the override collection.
    ///
    /// Never fails: a missing or malformed cache file yields an empty
    /// collection (logged at warn level for the malformed case). With a
    /// remote configured, a successful remote fetch replaces the cache
    /// wholesale; a failed fetch falls back to the cached copy.
    pub async fn load(&self) -> Vec<ScheduleOverride> {
        if let Some(remote) = &self.remote {
            match remote.fetch().await {
                Ok(overrides) => {
                    if let Err(error) = self.write_cache(&overrides).await {
                        warn!("Failed to refresh override cache from remote: {error}");
                    }
                    return overrides;
                }
                Err(error) => {
                    warn!("Remote override fetch failed, using local cache: {error}");
                }
            }
        }
        self.read_cache().await
    }

    /// Persists the full override collection.
    ///
    /// The local write is authoritative. With a remote configured, the
    /// collection is pushed afterwards on a best-effort basis; a push
    /// failure is logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or the local
    /// cache file cannot be written.
    pub async fn save(&self, overrides: &[ScheduleOverride]) -> Result<(), PersistenceError> {
        self.write_cache(overrides).await?;

        if let Some(remote) = &self.remote {
            if let Err(error) = remote.push(overrides).await {
                warn!("Remote override push failed, local save stands: {error}");
            }
        }
        Ok(())
    }

    /// Creates a new override, assigns it a fresh identifier and persists
    /// the updated collection.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated collection fails.
    pub async fn create(
        &self,
        date: Date,
        employee_name: String,
        kind: OverrideKind,
        note: Option<String>,
    ) -> Result<ScheduleOverride, PersistenceError> {
        let created: ScheduleOverride =
            ScheduleOverride::new(generate_override_id(), date, employee_name, kind, note);

        let mut overrides: Vec<ScheduleOverride> = self.load().await;
        overrides.push(created.clone());
        self.save(&overrides).await?;

        debug!("Created override {}", created.id);
        Ok(created)
    }

    /// Deletes the override with the given identifier and persists the
    /// updated collection.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::OverrideNotFound`] if no override carries
    /// the identifier, or an error if persisting the updated collection
    /// fails.
    pub async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        let mut overrides: Vec<ScheduleOverride> = self.load().await;
        let position: usize = overrides
            .iter()
            .position(|ovr| ovr.id == id)
            .ok_or_else(|| PersistenceError::OverrideNotFound(id.to_string()))?;

        overrides.remove(position);
        self.save(&overrides).await?;

        debug!("Deleted override {id}");
        Ok(())
    }

    async fn read_cache(&self) -> Vec<ScheduleOverride> {
        let contents: String = match tokio::fs::read_to_string(&self.cache_path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(error) => {
                warn!("Failed to read override cache, treating as empty: {error}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ScheduleOverride>>(&contents) {
            Ok(overrides) => overrides,
            Err(error) => {
                warn!("Override cache is malformed, treating as empty: {error}");
                Vec::new()
            }
        }
    }

    async fn write_cache(&self, overrides: &[ScheduleOverride]) -> Result<(), PersistenceError> {
        let contents: String = serde_json::to_string_pretty(overrides)?;
        tokio::fs::write(&self.cache_path, contents).await?;
        Ok(())
    }
}

fn generate_override_id() -> String {
    let suffix: String = Alphanumeric.sample_string(&mut rand::rng(), OVERRIDE_ID_LENGTH);
    format!("ovr-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::generate_override_id;

    #[test]
    fn test_generated_ids_are_prefixed_and_distinct() {
        let first: String = generate_override_id();
        let second: String = generate_override_id();

        assert!(first.starts_with("ovr-"));
        assert_eq!(first.len(), "ovr-".len() + 10);
        assert_ne!(first, second);
    }
}
