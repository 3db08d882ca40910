// SPDX-License-Identifier: MPL-2.0
//! Hero banner: greeting, name, typed-out title, tagline and social links.

use super::Message;
use crate::content::{Owner, SectionKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

/// Title typed one character per tick, with a blinking caret.
#[derive(Debug, Clone)]
pub struct Typing {
    full: String,
    /// Number of characters revealed.
    shown: usize,
    total: usize,
    caret_visible: bool,
}

impl Typing {
    #[must_use]
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let total = full.chars().count();
        Self {
            full,
            shown: 0,
            total,
            caret_visible: true,
        }
    }

    /// Reveals the next character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.shown >= self.total {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn blink(&mut self) {
        self.caret_visible = !self.caret_visible;
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// The revealed prefix, cut on a character boundary.
    #[must_use]
    pub fn visible(&self) -> &str {
        match self.full.char_indices().nth(self.shown) {
            Some((end, _)) => &self.full[..end],
            None => &self.full,
        }
    }
}

pub fn view<'a>(
    owner: &'a Owner,
    typing: &'a Typing,
    i18n: &'a I18n,
    viewport_height: f32,
) -> Element<'a, Message> {
    let greeting = Text::new(i18n.tr("hero-greeting"))
        .size(typography::TITLE_MD)
        .style(styles::text::secondary);

    let name = Text::new(owner.name.as_str())
        .size(typography::DISPLAY)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .style(styles::text::primary);

    let caret = Text::new(if typing.caret_visible() { "|" } else { " " })
        .size(typography::DISPLAY_SM)
        .style(styles::text::accent);

    let title = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(typing.visible())
                .size(typography::DISPLAY_SM)
                .style(styles::text::accent),
        )
        .push(caret);

    let tagline = Text::new(owner.tagline.as_str())
        .size(typography::BODY_LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::text::muted);

    let links = owner.links.iter().fold(Row::new().spacing(spacing::MD), |row, link| {
        row.push(
            button(Text::new(link.label.as_str()).size(typography::BODY_SM))
                .on_press(Message::CopyLink(Some(link.href.clone())))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::ghost),
        )
    });

    let scroll_hint = button(Text::new(format!("{} ↓", i18n.tr("hero-scroll-hint"))).size(typography::BODY_SM))
        .on_press(Message::ScrollTo(SectionKind::About.id().to_string()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::ghost);

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH * 0.75)
        .push(greeting)
        .push(name)
        .push(title)
        .push(tagline)
        .push(links)
        .push(scroll_hint);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(viewport_height.max(sizing::HERO_MIN_HEIGHT)))
        .padding(iced::Padding {
            top: sizing::NAVBAR_HEIGHT,
            ..iced::Padding::ZERO
        })
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_reveals_one_character_per_tick() {
        let mut typing = Typing::new("Rust");
        assert_eq!(typing.visible(), "");

        assert!(typing.tick());
        assert!(typing.tick());
        assert_eq!(typing.visible(), "Ru");

        while typing.tick() {}
        assert!(typing.is_done());
        assert_eq!(typing.visible(), "Rust");
        assert!(!typing.tick());
    }

    #[test]
    fn typing_respects_multibyte_characters() {
        let mut typing = Typing::new("Éloïse");
        typing.tick();
        typing.tick();
        typing.tick();
        assert_eq!(typing.visible(), "Élo");
    }

    #[test]
    fn empty_title_is_done_immediately() {
        let typing = Typing::new("");
        assert!(typing.is_done());
        assert_eq!(typing.visible(), "");
    }

    #[test]
    fn caret_blinks() {
        let mut typing = Typing::new("x");
        assert!(typing.caret_visible());
        typing.blink();
        assert!(!typing.caret_visible());
    }
}
