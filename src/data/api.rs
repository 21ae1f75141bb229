// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the parliamentary data API.
//!
//! The API is a plain JSON-over-HTTP surface:
//!
//! - `GET {base}/members`: member index
//! - `GET {base}/members/{id}`: one member, `404` when unknown
//! - `GET {base}/members/{id}/votes`: voting record
//! - `GET {base}/members/{id}/speeches`: parliamentary activity
//! - `GET {base}/members/{id}/spending`: spending entries
//! - `GET {base}/members/{id}/transparency`: transparency declarations

use crate::data::model::{
    Member, MemberSummary, SpeechRecord, SpendingEntry, TransparencyEntry, VoteRecord,
};
use crate::error::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    pub async fn member_index(&self) -> Result<Vec<MemberSummary>> {
        self.get_json("members").await
    }

    /// Looks up one member; `Ok(None)` when the API reports `404`.
    pub async fn member(&self, id: &str) -> Result<Option<Member>> {
        let response = self
            .http
            .get(self.endpoint(&format!("members/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.json::<Member>().await?))
    }

    pub async fn votes(&self, id: &str) -> Result<Vec<VoteRecord>> {
        self.get_json(&format!("members/{id}/votes")).await
    }

    pub async fn speeches(&self, id: &str) -> Result<Vec<SpeechRecord>> {
        self.get_json(&format!("members/{id}/speeches")).await
    }

    pub async fn spending(&self, id: &str) -> Result<Vec<SpendingEntry>> {
        self.get_json(&format!("members/{id}/spending")).await
    }

    pub async fn transparency(&self, id: &str) -> Result<Vec<TransparencyEntry>> {
        self.get_json(&format!("members/{id}/transparency")).await
    }
}
