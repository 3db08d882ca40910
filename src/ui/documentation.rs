// SPDX-License-Identifier: MPL-2.0
//! Documentation screen: a back link and the rendered markdown article.

use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::Font;
use iced::widget::{button, markdown, scrollable, text, Column, Container};
use iced::{alignment, border, Background, Color, Element, Length, Padding, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    BackToPortfolio,
    LinkClicked(markdown::Uri),
}

/// Parsed documentation, kept for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<markdown::Item>,
}

impl State {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let items: Vec<markdown::Item> = markdown::parse(source).collect();
        tracing::debug!(items = items.len(), "documentation parsed");
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[markdown::Item] {
        &self.items
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, theme: &Theme) -> Element<'a, Message> {
        let scheme = ColorScheme::for_theme(theme);

        let back = button(text(format!("← {}", i18n.tr("docs-back"))).size(typography::BODY))
            .on_press(Message::BackToPortfolio)
            .padding(0)
            .style(styles::button::link);

        let article = markdown::view(&self.items, settings(&scheme)).map(Message::LinkClicked);

        let body = Column::new()
            .spacing(spacing::XL)
            .push(back)
            .push(article)
            .max_width(sizing::CONTENT_MAX_WIDTH * 0.75);

        let page = Container::new(body)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XXL);

        Container::new(scrollable(page).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }
}

/// Markdown settings in the portfolio palette: accent links and tinted
/// inline code.
fn settings(scheme: &ColorScheme) -> markdown::Settings {
    let style = markdown::Style {
        font: Font::DEFAULT,
        inline_code_highlight: markdown::Highlight {
            background: Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.text_primary
            }),
            border: border::rounded(radius::SM),
        },
        inline_code_padding: Padding::from([0.0, spacing::XXS]),
        inline_code_color: scheme.accent_end,
        inline_code_font: Font::MONOSPACE,
        code_block_font: Font::MONOSPACE,
        link_color: scheme.accent_start,
    };
    markdown::Settings::with_text_size(typography::BODY_LG, style)
}
