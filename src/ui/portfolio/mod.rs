// SPDX-License-Identifier: MPL-2.0
//! The portfolio page.
//!
//! One scrollable holds the sections in navigation order. Each section, and
//! the column holding them all, is wrapped in a layout probe; together with
//! the probes in the [`navbar`](crate::ui::navbar) they feed a
//! [`MeasuredLayout`](crate::nav::MeasuredLayout) that the navigation
//! indicator reads.
//!
//! - [`component`] - Page state, messages and update logic
//! - [`hero`], [`about`], [`projects`], [`skills`], [`contact`] - Section views

pub mod about;
pub mod component;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;

pub use component::{Effect, Message, State, SCROLLABLE_ID};

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Container, Space, Text};
use iced::{alignment, Element, Font, Length};

/// Centered section title with the accent rule and an optional intro line.
fn section_header<'a>(title: String, intro: Option<&'a str>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(styles::text::accent),
        )
        .push(
            container(Space::new())
                .width(Length::Fixed(80.0))
                .height(Length::Fixed(4.0))
                .style(styles::container::accent),
        );

    if let Some(intro) = intro {
        column = column.push(
            Text::new(intro)
                .size(typography::BODY_LG)
                .style(styles::text::muted)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH * 0.6)),
        );
    }

    column.into()
}

/// Small rounded label.
fn chip<'a>(label: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::chip)
        .into()
}
