// SPDX-License-Identifier: MPL-2.0
//! Voting record panel.

use crate::data::model::VoteRecord;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, labeled_line, placeholder};
use crate::ui::design_tokens::spacing;
use iced::{widget::Column, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub votes: &'a [VoteRecord],
}

/// One card per division; a placeholder when the record is empty.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.votes.is_empty() {
        return placeholder(ctx.i18n.tr("voting-empty"));
    }

    let mut column = Column::new().spacing(spacing::SM);
    for vote in ctx.votes {
        let body = Column::new()
            .spacing(spacing::XXS)
            .push(labeled_line(
                ctx.i18n.tr("voting-cast-label"),
                vote.vote.clone(),
            ))
            .push(labeled_line(
                ctx.i18n.tr("voting-party-line-label"),
                super::yes_no(ctx.i18n, vote.matched_party_line),
            ));
        column = column.push(card(vote.motion_title.clone(), body.into()));
    }
    column.into()
}
