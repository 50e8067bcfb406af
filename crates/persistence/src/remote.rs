// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remote document store client.
//!
//! The remote side is a single JSON document holding the whole override
//! collection. Reads hit `{base_url}/latest` and unwrap the `record`
//! envelope; writes PUT the bare array back to `{base_url}`. Both carry the
//! master key as an `X-Master-Key` header. Last write wins; there is no
//! merging.

use crate::error::PersistenceError;
use escala_domain::ScheduleOverride;
use serde::Deserialize;

const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// Connection settings for the remote document store.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub master_key: String,
}

/// Envelope the remote store wraps around the stored document on reads.
#[derive(Debug, Deserialize)]
struct RemoteDocument {
    record: Vec<ScheduleOverride>,
}

#[derive(Debug)]
pub(crate) struct RemoteStore {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl RemoteStore {
    pub(crate) fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the full override collection from the remote store.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the remote answers with a
    /// non-success status, or the body does not parse as an override
    /// document.
    pub(crate) async fn fetch(&self) -> Result<Vec<ScheduleOverride>, PersistenceError> {
        let url: String = format!("{}/latest", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .header(MASTER_KEY_HEADER, &self.config.master_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus(status.as_u16()));
        }

        let document: RemoteDocument = response.json::<RemoteDocument>().await?;
        Ok(document.record)
    }

    /// Replaces the remote document with the given collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the remote answers with a
    /// non-success status.
    pub(crate) async fn push(
        &self,
        overrides: &[ScheduleOverride],
    ) -> Result<(), PersistenceError> {
        let response = self
            .client
            .put(&self.config.base_url)
            .header(MASTER_KEY_HEADER, &self.config.master_key)
            .json(overrides)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus(status.as_u16()));
        }
        Ok(())
    }
}
