// SPDX-License-Identifier: MPL-2.0
//! Parliamentary activity panel (speeches and interventions).

use crate::data::model::SpeechRecord;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, placeholder};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{text, Column, Text},
    Element, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub speeches: &'a [SpeechRecord],
}

/// One card per speech; a placeholder when there is no recorded activity.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.speeches.is_empty() {
        return placeholder(ctx.i18n.tr("activity-empty"));
    }

    let mut column = Column::new().spacing(spacing::SM);
    for speech in ctx.speeches {
        let body = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(speech.content.clone()).size(typography::BODY))
            .push(date_caption(speech.date.to_string()));
        column = column.push(card(speech.title.clone(), body.into()));
    }
    column.into()
}

fn date_caption<'a, Message: 'a>(date: String) -> Element<'a, Message> {
    Text::new(date)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_activity_renders_placeholder() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            speeches: &[],
        });
    }

    #[test]
    fn speeches_render_cards() {
        let i18n = I18n::default();
        let speeches = vec![SpeechRecord {
            id: "sp-1".to_string(),
            title: "On the housing bill".to_string(),
            content: "We must build more homes.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        }];
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            speeches: &speeches,
        });
    }
}
