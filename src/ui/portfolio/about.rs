// SPDX-License-Identifier: MPL-2.0
//! About section: bio paragraphs and highlight cards.

use super::{section_header, Message};
use crate::content::{About, SectionKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(about: &'a About, i18n: &'a I18n) -> Element<'a, Message> {
    let bio = about
        .paragraphs
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, paragraph| {
            column.push(
                Text::new(paragraph.as_str())
                    .size(typography::BODY_LG)
                    .style(styles::text::secondary),
            )
        })
        .push(
            button(Text::new(i18n.tr("about-cta")).size(typography::BODY))
                .on_press(Message::ScrollTo(SectionKind::Contact.id().to_string()))
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::gradient),
        )
        .width(Length::FillPortion(1));

    let highlights = about
        .highlights
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, highlight| {
            let mut card = Column::new().spacing(spacing::XS).push(
                Text::new(highlight.title.as_str())
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary),
            );
            if !highlight.description.is_empty() {
                card = card.push(
                    Text::new(highlight.description.as_str())
                        .size(typography::BODY_SM)
                        .style(styles::text::muted),
                );
            }
            row.push(
                Container::new(card)
                    .width(Length::Fixed(sizing::CARD_WIDTH * 0.6))
                    .padding(spacing::LG)
                    .style(styles::container::card),
            )
        })
        .wrap();

    let body = Row::new()
        .spacing(spacing::XXL)
        .push(bio)
        .push(Container::new(highlights).width(Length::FillPortion(1)));

    Column::new()
        .spacing(spacing::XXL)
        .push(section_header(i18n.tr("about-title"), None))
        .push(body)
        .into()
}
