// SPDX-License-Identifier: MPL-2.0
//! Transparency declarations panel.

use crate::data::model::TransparencyEntry;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, placeholder};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{text, Column, Text},
    Element, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [TransparencyEntry],
}

/// One card per declaration; a placeholder when there are none.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.entries.is_empty() {
        return placeholder(ctx.i18n.tr("transparency-empty"));
    }

    let mut column = Column::new().spacing(spacing::SM);
    for entry in ctx.entries {
        let body = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.description.clone()).size(typography::BODY))
            .push(
                Text::new(entry.date.to_string())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.color),
                    }),
            );
        column = column.push(card(entry.kind.clone(), body.into()));
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_entries_render_placeholder() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            entries: &[],
        });
    }

    #[test]
    fn entries_render_cards() {
        let i18n = I18n::default();
        let entries = vec![TransparencyEntry {
            kind: "Gift".to_string(),
            description: "Two tickets to the national opera".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        }];
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            entries: &entries,
        });
    }
}
