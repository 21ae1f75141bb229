// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar and the
//! profile page.
//!
//! The `App` struct wires together the data source, localization, and the
//! profile view state, and translates messages into side effects like the
//! member lookup tasks. Policy decisions (fail-silent loading, stale-cycle
//! handling, window sizing) stay close to the main update loop so it is
//! easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::data::{api, sample, Source};
use crate::diagnostics::{self, create_diagnostics, Severity, SharedDiagnostics};
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::profile;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging UI components, localization, and
/// the data source.
pub struct App {
    pub i18n: I18n,
    navbar: navbar::State,
    profile: profile::State,
    source: Source,
    diagnostics: SharedDiagnostics,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("member_id", &self.profile.member_id())
            .field("loading", &self.profile.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 700;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            navbar: navbar::State::default(),
            profile: profile::State::default(),
            source: Source::Sample(sample::Store::empty()),
            diagnostics: create_diagnostics(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the member index lookup,
    /// plus the first loading cycle when a member id was passed on the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();

        app.source = match flags.api_base_url.or_else(|| config.api_base_url.clone()) {
            Some(base_url) => Source::Api(api::Client::new(base_url)),
            None => match sample::Store::load() {
                Ok(store) => Source::Sample(store),
                Err(err) => {
                    diagnostics::record(
                        &app.diagnostics,
                        Severity::Error,
                        format!("bundled dataset unavailable: {err}"),
                    );
                    Source::Sample(sample::Store::empty())
                }
            },
        };

        let mut tasks = vec![update::load_index_task(app.source.clone())];
        if let Some(member_id) = flags.member_id {
            tasks.push(Task::done(Message::MemberSelected(member_id)));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.profile.member() {
            Some(member) => format!("{} - {app_name}", member.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navbar: &mut self.navbar,
            profile: &mut self.profile,
            source: &self.source,
            diagnostics: &self.diagnostics,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::MemberSelected(id) => update::handle_member_selected(&mut ctx, id),
            Message::IndexLoaded(result) => update::handle_index_loaded(&mut ctx, result),
            Message::MemberLoaded { generation, result } => {
                update::handle_member_loaded(&mut ctx, generation, result)
            }
            Message::ListsLoaded { generation, result } => {
                update::handle_lists_loaded(&mut ctx, generation, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navbar: &self.navbar,
            profile: &self.profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Member, MemberSummary, ProfileLists, VoteRecord};
    use crate::error::Error;

    fn sample_member(id: &str, name: &str) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            party: "Unity".to_string(),
            constituency: "Harborview".to_string(),
            email: format!("{id}@parliament.example"),
            office: "12 Quay Road, Harborview".to_string(),
            social: None,
        }
    }

    fn sample_lists() -> ProfileLists {
        ProfileLists {
            votes: vec![VoteRecord {
                id: "v-1".to_string(),
                motion_title: "Housing bill".to_string(),
                vote: "Yes".to_string(),
                matched_party_line: true,
            }],
            ..ProfileLists::default()
        }
    }

    fn diagnostics_count(app: &App) -> usize {
        app.diagnostics.lock().expect("lock").len()
    }

    #[test]
    fn selecting_a_member_starts_a_loading_cycle() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));

        assert!(app.profile.is_loading());
        assert_eq!(app.profile.member_id(), Some("mp-001"));
    }

    #[test]
    fn full_cycle_populates_state_and_clears_loading() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let generation = app.profile.generation();

        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Ok(Some(sample_member("mp-001", "Avery Holt"))),
        });
        let _ = app.update(Message::ListsLoaded {
            generation,
            result: Ok(sample_lists()),
        });

        assert!(!app.profile.is_loading());
        assert_eq!(app.profile.member().map(|m| m.name.as_str()), Some("Avery Holt"));
        assert_eq!(app.profile.lists().votes.len(), 1);
    }

    #[test]
    fn failed_join_applies_nothing_and_clears_loading() {
        let mut app = App::default();

        // First cycle succeeds
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let generation = app.profile.generation();
        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Ok(Some(sample_member("mp-001", "Avery Holt"))),
        });
        let _ = app.update(Message::ListsLoaded {
            generation,
            result: Ok(sample_lists()),
        });

        // Second cycle fails its joined lookup
        let _ = app.update(Message::MemberSelected("mp-002".to_string()));
        let generation = app.profile.generation();
        let recorded_before = diagnostics_count(&app);
        let _ = app.update(Message::ListsLoaded {
            generation,
            result: Err(Error::Api("connection reset".to_string())),
        });

        assert!(!app.profile.is_loading());
        // The previous cycle's lists were not overwritten
        assert_eq!(app.profile.lists().votes.len(), 1);
        assert_eq!(diagnostics_count(&app), recorded_before + 1);
    }

    #[test]
    fn failed_member_lookup_ends_the_cycle() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let generation = app.profile.generation();

        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Err(Error::Api("timeout".to_string())),
        });

        assert!(!app.profile.is_loading());
        assert!(app.profile.member().is_none());
        assert_eq!(diagnostics_count(&app), 1);
    }

    #[test]
    fn stale_cycle_results_are_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let old_generation = app.profile.generation();
        let _ = app.update(Message::MemberSelected("mp-002".to_string()));

        let _ = app.update(Message::MemberLoaded {
            generation: old_generation,
            result: Ok(Some(sample_member("mp-001", "Avery Holt"))),
        });
        let _ = app.update(Message::ListsLoaded {
            generation: old_generation,
            result: Ok(sample_lists()),
        });

        // The newer cycle is untouched by the stale results
        assert!(app.profile.member().is_none());
        assert!(app.profile.lists().votes.is_empty());
        assert!(app.profile.is_loading());
        assert_eq!(app.profile.member_id(), Some("mp-002"));
    }

    #[test]
    fn changing_member_replaces_all_result_sets() {
        let mut app = App::default();

        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let generation = app.profile.generation();
        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Ok(Some(sample_member("mp-001", "Avery Holt"))),
        });
        let _ = app.update(Message::ListsLoaded {
            generation,
            result: Ok(sample_lists()),
        });

        let _ = app.update(Message::MemberSelected("mp-002".to_string()));
        let generation = app.profile.generation();
        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Ok(Some(sample_member("mp-002", "Sam Okafor"))),
        });
        let _ = app.update(Message::ListsLoaded {
            generation,
            result: Ok(ProfileLists::default()),
        });

        assert_eq!(app.profile.member().map(|m| m.name.as_str()), Some("Sam Okafor"));
        assert!(app.profile.lists().votes.is_empty());
        assert!(!app.profile.is_loading());
    }

    #[test]
    fn index_load_populates_picker_and_keeps_selection() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-002".to_string()));

        let _ = app.update(Message::IndexLoaded(Ok(vec![
            MemberSummary {
                id: "mp-001".to_string(),
                name: "Avery Holt".to_string(),
            },
            MemberSummary {
                id: "mp-002".to_string(),
                name: "Sam Okafor".to_string(),
            },
        ])));

        assert_eq!(app.navbar.members().len(), 2);
        assert_eq!(
            app.navbar.selected().map(|m| m.id.as_str()),
            Some("mp-002")
        );
    }

    #[test]
    fn failed_index_load_is_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::IndexLoaded(Err(Error::Api(
            "bad gateway".to_string(),
        ))));

        assert!(app.navbar.members().is_empty());
        assert_eq!(diagnostics_count(&app), 1);
    }

    #[test]
    fn title_shows_app_name_without_member() {
        let app = App::default();
        assert_eq!(app.title(), "CivicLens");
    }

    #[test]
    fn title_shows_member_name_when_loaded() {
        let mut app = App::default();
        let _ = app.update(Message::MemberSelected("mp-001".to_string()));
        let generation = app.profile.generation();
        let _ = app.update(Message::MemberLoaded {
            generation,
            result: Ok(Some(sample_member("mp-001", "Avery Holt"))),
        });

        assert_eq!(app.title(), "Avery Holt - CivicLens");
    }
}
