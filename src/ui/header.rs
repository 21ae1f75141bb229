// SPDX-License-Identifier: MPL-2.0
//! Header summary shown above the profile tabs.

use crate::data::model::Member;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    widget::{container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub member: &'a Member,
}

/// Render the member summary header. Pure display, no interactions.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(&ctx.member.name).size(typography::TITLE_MD);
    let party = Text::new(&ctx.member.party).size(typography::BODY);
    let constituency = Text::new(format!(
        "{}: {}",
        ctx.i18n.tr("header-constituency-label"),
        ctx.member.constituency
    ))
    .size(typography::BODY);

    let summary = Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(name)
                .push(party),
        )
        .push(constituency);

    Container::new(summary)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().primary.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Member;
    use crate::i18n::fluent::I18n;

    fn sample_member() -> Member {
        Member {
            id: "mp-001".to_string(),
            name: "Avery Holt".to_string(),
            party: "Unity".to_string(),
            constituency: "Harborview".to_string(),
            email: "avery.holt@parliament.example".to_string(),
            office: "12 Quay Road, Harborview".to_string(),
            social: None,
        }
    }

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let member = sample_member();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            member: &member,
        });
    }
}
