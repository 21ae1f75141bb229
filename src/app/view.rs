// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar and
//! the profile page based on application state.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::profile;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navbar: &'a navbar::State,
    pub profile: &'a profile::State,
}

/// Renders the application: navbar on top, profile page below.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
    })
    .map(Message::Navbar);

    let profile_view = profile::view(profile::ViewContext {
        i18n: ctx.i18n,
        state: ctx.profile,
    })
    .map(Message::Profile);

    let column = iced::widget::Column::new().push(navbar_view).push(
        Container::new(profile_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
