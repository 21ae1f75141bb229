// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::data::model::{Member, MemberSummary, ProfileLists};
use crate::error::Error;
use crate::ui::navbar;
use crate::ui::profile;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Profile(profile::Message),
    /// Begin a loading cycle for the given member id.
    MemberSelected(String),
    /// Result of the member index lookup that feeds the picker.
    IndexLoaded(Result<Vec<MemberSummary>, Error>),
    /// Result of one cycle's member lookup. The generation identifies the
    /// cycle the result belongs to.
    MemberLoaded {
        generation: u64,
        result: Result<Option<Member>, Error>,
    },
    /// Joined result of one cycle's four concurrent list lookups.
    ListsLoaded {
        generation: u64,
        result: Result<ProfileLists, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL; takes precedence over the config file. When
    /// neither is set, the bundled sample dataset is served.
    pub api_base_url: Option<String>,
    /// Optional member id to load on startup.
    pub member_id: Option<String>,
}
