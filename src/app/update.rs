// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The loading cycle lives here: one member lookup, then the four list
//! lookups issued concurrently and joined. Each async result message carries
//! the generation of the cycle it belongs to; results from superseded cycles
//! are dropped so a slow response can never overwrite a newer member's data.

use super::Message;
use crate::data::{self, Source};
use crate::diagnostics::{self, Severity, SharedDiagnostics};
use crate::error::Error;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::profile;
use iced::Task;

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub navbar: &'a mut navbar::State,
    pub profile: &'a mut profile::State,
    pub source: &'a Source,
    pub diagnostics: &'a SharedDiagnostics,
}

/// Builds the task that fetches the member index for the picker.
pub fn load_index_task(source: Source) -> Task<Message> {
    Task::perform(
        async move { source.member_index().await },
        Message::IndexLoaded,
    )
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::MemberPicked(summary) => handle_member_selected(ctx, summary.id),
        NavbarEvent::RefreshIndex => load_index_task(ctx.source.clone()),
    }
}

pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    profile::update(ctx.profile, message);
    Task::none()
}

/// Starts a fresh loading cycle: marks the page loading and issues the
/// member lookup tagged with the new cycle's generation.
pub fn handle_member_selected(ctx: &mut UpdateContext<'_>, id: String) -> Task<Message> {
    ctx.navbar.select_id(&id);
    let generation = ctx.profile.start_cycle(&id);

    let source = ctx.source.clone();
    Task::perform(
        async move { source.member(&id).await },
        move |result| Message::MemberLoaded { generation, result },
    )
}

pub fn handle_index_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<crate::data::model::MemberSummary>, Error>,
) -> Task<Message> {
    match result {
        Ok(members) => {
            ctx.navbar.set_members(members);
            // Keep the picker in sync when the profile was loaded first
            if let Some(id) = ctx.profile.member_id() {
                let id = id.to_string();
                ctx.navbar.select_id(&id);
            }
        }
        Err(err) => {
            diagnostics::record(
                ctx.diagnostics,
                Severity::Warning,
                format!("member index lookup failed: {err}"),
            );
        }
    }
    Task::none()
}

/// Applies the member record of one cycle and issues the joined list
/// lookups. A failed member lookup ends the cycle: the error is recorded
/// and the list lookups are never issued.
pub fn handle_member_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<Option<crate::data::model::Member>, Error>,
) -> Task<Message> {
    if generation != ctx.profile.generation() {
        diagnostics::record(
            ctx.diagnostics,
            Severity::Info,
            "dropped member result from a superseded loading cycle",
        );
        return Task::none();
    }

    match result {
        Ok(member) => {
            ctx.profile.apply_member(generation, member);

            let Some(id) = ctx.profile.member_id().map(String::from) else {
                return Task::none();
            };
            let source = ctx.source.clone();
            Task::perform(data::fetch_lists(source, id), move |result| {
                Message::ListsLoaded { generation, result }
            })
        }
        Err(err) => {
            diagnostics::record(
                ctx.diagnostics,
                Severity::Error,
                format!("member lookup failed: {err}"),
            );
            ctx.profile.fail_cycle(generation);
            Task::none()
        }
    }
}

/// Applies the four list sets of one cycle together, or none of them when
/// the join failed. Either way the cycle's loading flag clears.
pub fn handle_lists_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<crate::data::model::ProfileLists, Error>,
) -> Task<Message> {
    if generation != ctx.profile.generation() {
        diagnostics::record(
            ctx.diagnostics,
            Severity::Info,
            "dropped list results from a superseded loading cycle",
        );
        return Task::none();
    }

    match result {
        Ok(lists) => {
            ctx.profile.apply_lists(generation, lists);
        }
        Err(err) => {
            diagnostics::record(
                ctx.diagnostics,
                Severity::Error,
                format!("profile data load failed: {err}"),
            );
            ctx.profile.fail_cycle(generation);
        }
    }
    Task::none()
}
