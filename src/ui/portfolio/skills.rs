// SPDX-License-Identifier: MPL-2.0
//! Skills section: progress bars grouped by category, then certifications.

use super::{chip, section_header, Message};
use crate::content::{Skill, SkillCategory, Skills, MAX_SKILL_LEVEL};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(skills: &'a Skills, i18n: &'a I18n) -> Element<'a, Message> {
    let categories = skills
        .categories
        .iter()
        .fold(Row::new().spacing(spacing::XL), |row, category| {
            row.push(category_card(category, i18n))
        })
        .wrap();

    let intro = (!skills.intro.is_empty()).then_some(skills.intro.as_str());
    let mut column = Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .push(section_header(i18n.tr("skills-title"), intro))
        .push(categories);

    if !skills.certifications.is_empty() {
        let chips = skills
            .certifications
            .iter()
            .fold(Row::new().spacing(spacing::SM), |row, certification| {
                row.push(chip(certification.as_str()))
            })
            .wrap();

        column = column.push(
            Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(i18n.tr("skills-certifications"))
                        .size(typography::TITLE_MD)
                        .style(styles::text::primary),
                )
                .push(chips),
        );
    }

    column.into()
}

fn category_card<'a>(category: &'a SkillCategory, i18n: &'a I18n) -> Element<'a, Message> {
    let bars = category
        .skills
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, skill| {
            column.push(skill_bar(skill, i18n))
        });

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(category.name.as_str())
                    .size(typography::TITLE_MD)
                    .style(styles::text::primary),
            )
            .push(bars),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::XL)
    .style(styles::container::card)
    .into()
}

/// Filled and empty portions of a skill bar, out of 100.
fn bar_portions(skill: &Skill) -> (u16, u16) {
    let level = u16::from(skill.level.min(MAX_SKILL_LEVEL));
    (level, u16::from(MAX_SKILL_LEVEL) - level)
}

fn skill_bar<'a>(skill: &'a Skill, i18n: &'a I18n) -> Element<'a, Message> {
    let (filled, empty) = bar_portions(skill);
    let level = filled.to_string();

    let label = Row::new()
        .push(
            Text::new(skill.name.as_str())
                .size(typography::BODY)
                .style(styles::text::secondary)
                .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr_with_args("skills-level", &[("level", level.as_str())]))
                .size(typography::BODY_SM)
                .style(styles::text::accent),
        );

    let fill = Row::new()
        .height(Length::Fill)
        .push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::accent),
        )
        .push(Space::new().width(Length::FillPortion(empty)));

    let track = Container::new(fill)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SKILL_BAR_HEIGHT))
        .style(styles::container::track);

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(track)
        .into()
}
