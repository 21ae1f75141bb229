// SPDX-License-Identifier: MPL-2.0
//! Contact panel.
//!
//! Email and constituency office render unconditionally. The social-media
//! section only appears when the member has social links, and within it only
//! the links that are actually present.

use crate::data::model::{Member, SocialLinks};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{text, Column, Text},
    Element, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub member: &'a Member,
}

/// Which social lines to render, in display order: translation key + value.
fn social_lines(social: &SocialLinks) -> Vec<(&'static str, &str)> {
    let mut lines = Vec::new();
    if let Some(handle) = &social.handle {
        lines.push(("contact-handle-label", handle.as_str()));
    }
    if let Some(website) = &social.website {
        lines.push(("contact-website-label", website.as_str()));
    }
    lines
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(field(
            ctx.i18n.tr("contact-email-label"),
            ctx.member.email.clone(),
        ))
        .push(field(
            ctx.i18n.tr("contact-office-label"),
            ctx.member.office.clone(),
        ));

    if let Some(social) = &ctx.member.social {
        let mut section = Column::new()
            .spacing(spacing::XXS)
            .push(field_label(ctx.i18n.tr("contact-social-label")));
        for (key, value) in social_lines(social) {
            section = section.push(
                Text::new(format!("{}: {}", ctx.i18n.tr(key), value)).size(typography::BODY),
            );
        }
        column = column.push(section);
    }

    column.into()
}

fn field<'a, Message: 'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(field_label(label))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn field_label<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}
