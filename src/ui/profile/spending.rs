// SPDX-License-Identifier: MPL-2.0
//! Spending panel.

use crate::data::model::{format_amount, format_percentage, SpendingEntry};
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, labeled_line, placeholder};
use crate::ui::design_tokens::spacing;
use iced::{widget::Column, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spending: &'a [SpendingEntry],
}

/// One card per spending category with amount and two-decimal share.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.spending.is_empty() {
        return placeholder(ctx.i18n.tr("spending-empty"));
    }

    let mut column = Column::new().spacing(spacing::SM);
    for entry in ctx.spending {
        let body = Column::new()
            .spacing(spacing::XXS)
            .push(labeled_line(
                ctx.i18n.tr("spending-amount-label"),
                format_amount(entry.amount),
            ))
            .push(labeled_line(
                ctx.i18n.tr("spending-share-label"),
                format_percentage(entry.percentage),
            ));
        column = column.push(card(entry.category.clone(), body.into()));
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spending_renders_placeholder() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            spending: &[],
        });
    }

    #[test]
    fn entries_render_cards() {
        let i18n = I18n::default();
        let spending = vec![SpendingEntry {
            category: "Office costs".to_string(),
            amount: 14250.75,
            percentage: 12.345,
        }];
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            spending: &spending,
        });
    }
}
