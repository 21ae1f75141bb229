// SPDX-License-Identifier: MPL-2.0
//! Domain records supplied by the data source.
//!
//! These are plain read-only records; the profile page never mutates or
//! persists them. Each list is owned wholesale by the view state for the
//! duration of one member's visit and replaced wholesale on navigation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional social-media links on a member's profile. Both fields are
/// independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A member of parliament: the subject whose profile is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub party: String,
    pub constituency: String,
    pub email: String,
    /// Constituency office address.
    pub office: String,
    #[serde(default)]
    pub social: Option<SocialLinks>,
}

/// One row of the member index, used to populate the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
}

impl fmt::Display for MemberSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single division in the member's voting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub id: String,
    pub motion_title: String,
    /// The vote as cast, e.g. "Yes", "No", "Abstain".
    pub vote: String,
    pub matched_party_line: bool,
}

/// A speech or other parliamentary activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
}

/// One spending category with its share of the member's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub category: String,
    pub amount: f64,
    /// Share of total spending, 0-100.
    pub percentage: f64,
}

/// A transparency declaration (gifts, interests, travel, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransparencyEntry {
    /// Type label, e.g. "Gift" or "Declared interest".
    pub kind: String,
    pub description: String,
    pub date: NaiveDate,
}

/// The four list data sets of one loading cycle, applied together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileLists {
    pub votes: Vec<VoteRecord>,
    pub speeches: Vec<SpeechRecord>,
    pub spending: Vec<SpendingEntry>,
    pub transparency: Vec<TransparencyEntry>,
}

/// Formats a 0-100 share for display with two decimals, rounding half away
/// from zero (so `12.345` renders as `12.35%`).
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", (value * 100.0).round() / 100.0)
}

/// Formats a monetary amount for display with two decimals.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("${:.2}", (value * 100.0).round() / 100.0)
}
