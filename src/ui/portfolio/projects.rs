// SPDX-License-Identifier: MPL-2.0
//! Projects section: one card per project.

use super::{chip, section_header, Message};
use crate::content::{Project, Projects, SectionKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Font, Length};

pub fn view<'a>(projects: &'a Projects, i18n: &'a I18n) -> Element<'a, Message> {
    let cards = projects
        .items
        .iter()
        .fold(Row::new().spacing(spacing::XL), |row, project| {
            row.push(project_card(project, i18n))
        })
        .wrap();

    let more = button(Text::new(format!("{} →", i18n.tr("projects-more"))).size(typography::BODY_LG))
        .on_press(Message::ScrollTo(SectionKind::Contact.id().to_string()))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::ghost);

    let intro = (!projects.intro.is_empty()).then_some(projects.intro.as_str());

    Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .push(section_header(i18n.tr("projects-title"), intro))
        .push(cards)
        .push(more)
        .into()
}

fn project_card<'a>(project: &'a Project, i18n: &'a I18n) -> Element<'a, Message> {
    let mut title_row = Row::new().align_y(alignment::Vertical::Center).push(
        Text::new(project.title.as_str())
            .size(typography::TITLE_MD)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(styles::text::primary)
            .width(Length::Fill),
    );
    if !project.category.is_empty() {
        title_row = title_row.push(chip(project.category.as_str()));
    }

    let tech = project
        .tech
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, name| row.push(chip(name.as_str())))
        .wrap();

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("projects-code")).size(typography::BODY_SM))
                .on_press(Message::CopyLink(project.code_url.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::ghost),
        )
        .push(
            button(Text::new(i18n.tr("projects-demo")).size(typography::BODY_SM))
                .on_press(Message::CopyLink(project.demo_url.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::gradient),
        );

    let body = Column::new()
        .spacing(spacing::MD)
        .push(title_row)
        .push(
            Text::new(project.description.as_str())
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(tech)
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(actions);

    Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH * 1.5))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}
