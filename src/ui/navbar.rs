// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the member picker.
//!
//! The picker is fed by the member index lookup; choosing an entry triggers
//! a fresh loading cycle for that member.

use crate::data::model::MemberSummary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row, Text},
    Element, Length,
};

/// Picker state: the known members and the current selection.
#[derive(Debug, Default)]
pub struct State {
    members: Vec<MemberSummary>,
    selected: Option<MemberSummary>,
}

impl State {
    /// Replaces the member index wholesale.
    pub fn set_members(&mut self, members: Vec<MemberSummary>) {
        if let Some(selected) = &self.selected {
            if !members.iter().any(|m| m.id == selected.id) {
                self.selected = None;
            }
        }
        self.members = members;
    }

    /// Marks the given member id as selected if it is in the index.
    pub fn select_id(&mut self, id: &str) {
        self.selected = self.members.iter().find(|m| m.id == id).cloned();
    }

    #[must_use]
    pub fn members(&self) -> &[MemberSummary] {
        &self.members
    }

    #[must_use]
    pub fn selected(&self) -> Option<&MemberSummary> {
        self.selected.as_ref()
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    MemberPicked(MemberSummary),
    RefreshIndex,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A member was chosen; start a loading cycle for it.
    MemberPicked(MemberSummary),
    /// Re-fetch the member index.
    RefreshIndex,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::MemberPicked(summary) => {
            state.selected = Some(summary.clone());
            Event::MemberPicked(summary)
        }
        Message::RefreshIndex => Event::RefreshIndex,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let picker = pick_list(
        ctx.state.members.clone(),
        ctx.state.selected.clone(),
        Message::MemberPicked,
    )
    .placeholder(ctx.i18n.tr("navbar-picker-placeholder"))
    .width(Length::Fixed(sizing::MEMBER_PICKER_WIDTH));

    let refresh_button =
        button(Text::new(ctx.i18n.tr("navbar-refresh-button")).size(typography::BODY))
            .on_press(Message::RefreshIndex)
            .padding(spacing::XS);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(title)
        .push(picker)
        .push(refresh_button);

    Container::new(bar)
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}
