// SPDX-License-Identifier: MPL-2.0
//! The member profile page: tab state, loading-cycle state, and rendering.
//!
//! The page owns five result sets (member record plus four lists) and a
//! loading flag. One loading cycle corresponds to one member identifier;
//! every cycle carries a generation number so results arriving after a newer
//! cycle has started can be recognized and ignored.

pub mod activity;
pub mod contact;
pub mod spending;
pub mod transparency;
pub mod voting;

use crate::data::model::{Member, ProfileLists};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::header;
use iced::{
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// The five switchable panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Voting,
    Activity,
    Spending,
    Transparency,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Voting,
        Tab::Activity,
        Tab::Spending,
        Tab::Transparency,
        Tab::Contact,
    ];

    /// Translation key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Voting => "tab-voting",
            Tab::Activity => "tab-activity",
            Tab::Spending => "tab-spending",
            Tab::Transparency => "tab-transparency",
            Tab::Contact => "tab-contact",
        }
    }

    #[must_use]
    pub fn next(self) -> Tab {
        match self {
            Tab::Voting => Tab::Activity,
            Tab::Activity => Tab::Spending,
            Tab::Spending => Tab::Transparency,
            Tab::Transparency => Tab::Contact,
            Tab::Contact => Tab::Voting,
        }
    }

    #[must_use]
    pub fn previous(self) -> Tab {
        match self {
            Tab::Voting => Tab::Contact,
            Tab::Activity => Tab::Voting,
            Tab::Spending => Tab::Activity,
            Tab::Transparency => Tab::Spending,
            Tab::Contact => Tab::Transparency,
        }
    }

    /// Maps the digit keys 1-5 to tabs.
    #[must_use]
    pub fn from_digit(digit: u32) -> Option<Tab> {
        match digit {
            1 => Some(Tab::Voting),
            2 => Some(Tab::Activity),
            3 => Some(Tab::Spending),
            4 => Some(Tab::Transparency),
            5 => Some(Tab::Contact),
            _ => None,
        }
    }
}

/// Profile page view state.
///
/// All five result sets are replaced wholesale by cycle results; nothing is
/// patched field-by-field from stale data.
#[derive(Debug, Default)]
pub struct State {
    member_id: Option<String>,
    member: Option<Member>,
    lists: ProfileLists,
    loading: bool,
    active_tab: Tab,
    generation: u64,
}

impl State {
    /// Begins a loading cycle for the given member id and returns the new
    /// cycle's generation. Prior result sets stay visible until replaced.
    pub fn start_cycle(&mut self, id: &str) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.member_id = Some(id.to_string());
        self.generation
    }

    /// Stores the member record for the given cycle. A `None` member leaves
    /// the prior/empty state untouched (no not-found signaling). Returns
    /// `false` when the result belongs to a superseded cycle.
    pub fn apply_member(&mut self, generation: u64, member: Option<Member>) -> bool {
        if generation != self.generation {
            return false;
        }
        if let Some(member) = member {
            self.member = Some(member);
        }
        true
    }

    /// Stores all four list sets and ends the cycle. Returns `false` when
    /// the result belongs to a superseded cycle.
    pub fn apply_lists(&mut self, generation: u64, lists: ProfileLists) -> bool {
        if generation != self.generation {
            return false;
        }
        self.lists = lists;
        self.loading = false;
        true
    }

    /// Ends the cycle without applying any results. Returns `false` when
    /// the failure belongs to a superseded cycle.
    pub fn fail_cycle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    #[must_use]
    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }

    #[must_use]
    pub fn lists(&self) -> &ProfileLists {
        &self.lists
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }
}

/// Messages emitted by the profile page.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    NextTab,
    PreviousTab,
}

/// Process a profile page message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::TabSelected(tab) => state.select_tab(tab),
        Message::NextTab => state.select_tab(state.active_tab.next()),
        Message::PreviousTab => state.select_tab(state.active_tab.previous()),
    }
}

/// Contextual data needed to render the profile page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the profile page: header, tab strip, and the active panel.
///
/// Callers only invoke this once a member record is present.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(member) = ctx.state.member() else {
        // Render surface contract: without a member there is nothing to show
        return Container::new(Text::new(ctx.i18n.tr("profile-loading")).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .padding(spacing::XL)
            .into();
    };

    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        member,
    });

    let lists = ctx.state.lists();
    let panel: Element<'a, Message> = match ctx.state.active_tab() {
        Tab::Voting => voting::view(voting::ViewContext {
            i18n: ctx.i18n,
            votes: &lists.votes,
        }),
        Tab::Activity => activity::view(activity::ViewContext {
            i18n: ctx.i18n,
            speeches: &lists.speeches,
        }),
        Tab::Spending => spending::view(spending::ViewContext {
            i18n: ctx.i18n,
            spending: &lists.spending,
        }),
        Tab::Transparency => transparency::view(transparency::ViewContext {
            i18n: ctx.i18n,
            entries: &lists.transparency,
        }),
        Tab::Contact => contact::view(contact::ViewContext {
            i18n: ctx.i18n,
            member,
        }),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(crate::ui::design_tokens::sizing::CONTENT_MAX_WIDTH)
        .push(header_view)
        .push(tab_strip(ctx.i18n, ctx.state))
        .push(panel);

    Container::new(scrollable(content).width(Length::Fill))
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// Build the row of tab buttons, highlighting the active one.
fn tab_strip<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let mut strip = Row::new().spacing(spacing::XS);

    for tab in Tab::ALL {
        let label = Text::new(i18n.tr(tab.label_key())).size(typography::BODY);
        let style = if tab == state.active_tab() {
            button::primary
        } else {
            button::secondary
        };
        strip = strip.push(
            button(label)
                .style(style)
                .padding(spacing::XS)
                .on_press(Message::TabSelected(tab)),
        );
    }

    if state.is_loading() {
        strip = strip.push(Text::new(i18n.tr("profile-refreshing")).size(typography::CAPTION));
    }

    strip.into()
}

/// Localized yes/no used by the voting panel.
pub(crate) fn yes_no(i18n: &I18n, value: bool) -> String {
    if value {
        i18n.tr("common-yes")
    } else {
        i18n.tr("common-no")
    }
}
