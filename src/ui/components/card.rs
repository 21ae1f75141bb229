// SPDX-License-Identifier: MPL-2.0
//! Card container used by every list panel, plus the empty-list placeholder.

use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    widget::{container, rule, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Build a card with a title header and arbitrary content below a rule.
pub fn card<'a, Message: 'a>(
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Text::new(title).size(typography::TITLE_SM);

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Build a dimmed placeholder line shown when a list panel has no entries.
pub fn placeholder<'a, Message: 'a>(text: String) -> Element<'a, Message> {
    Container::new(
        Text::new(text)
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            }),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

/// Build a `label: value` row used by card bodies and the contact panel.
pub fn labeled_line<'a, Message: 'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_builds_with_text_content() {
        let content: Element<'_, ()> = Text::new("body").into();
        let _element = card("Title".to_string(), content);
    }

    #[test]
    fn placeholder_builds() {
        let _element: Element<'_, ()> = placeholder("No voting record available".to_string());
    }
}
