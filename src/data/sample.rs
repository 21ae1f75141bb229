// SPDX-License-Identifier: MPL-2.0
//! Bundled sample dataset.
//!
//! When no API endpoint is configured the application serves a small dataset
//! embedded at compile time, so the viewer works offline out of the box. The
//! dataset lives in `assets/data/dataset.json` and mirrors the API's shapes:
//! a member list plus per-member lists keyed by member id.

use crate::data::model::{
    Member, MemberSummary, SpeechRecord, SpendingEntry, TransparencyEntry, VoteRecord,
};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct Asset;

const DATASET_FILE: &str = "dataset.json";

#[derive(Debug, Default, Deserialize)]
struct Dataset {
    members: Vec<Member>,
    #[serde(default)]
    votes: HashMap<String, Vec<VoteRecord>>,
    #[serde(default)]
    speeches: HashMap<String, Vec<SpeechRecord>>,
    #[serde(default)]
    spending: HashMap<String, Vec<SpendingEntry>>,
    #[serde(default)]
    transparency: HashMap<String, Vec<TransparencyEntry>>,
}

/// Read-only store over the embedded dataset. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    data: Arc<Dataset>,
}

impl Store {
    /// Parses the embedded dataset.
    pub fn load() -> Result<Self> {
        let content = Asset::get(DATASET_FILE)
            .ok_or_else(|| Error::Data(format!("embedded dataset {DATASET_FILE} missing")))?;
        let data: Dataset = serde_json::from_slice(content.data.as_ref())?;
        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// A store with no members at all; used when the embedded dataset
    /// cannot be parsed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Arc::new(Dataset::default()),
        }
    }

    pub async fn member_index(&self) -> Result<Vec<MemberSummary>> {
        Ok(self
            .data
            .members
            .iter()
            .map(|m| MemberSummary {
                id: m.id.clone(),
                name: m.name.clone(),
            })
            .collect())
    }

    pub async fn member(&self, id: &str) -> Result<Option<Member>> {
        Ok(self.data.members.iter().find(|m| m.id == id).cloned())
    }

    pub async fn votes(&self, id: &str) -> Result<Vec<VoteRecord>> {
        Ok(self.data.votes.get(id).cloned().unwrap_or_default())
    }

    pub async fn speeches(&self, id: &str) -> Result<Vec<SpeechRecord>> {
        Ok(self.data.speeches.get(id).cloned().unwrap_or_default())
    }

    pub async fn spending(&self, id: &str) -> Result<Vec<SpendingEntry>> {
        Ok(self.data.spending.get(id).cloned().unwrap_or_default())
    }

    pub async fn transparency(&self, id: &str) -> Result<Vec<TransparencyEntry>> {
        Ok(self.data.transparency.get(id).cloned().unwrap_or_default())
    }
}
