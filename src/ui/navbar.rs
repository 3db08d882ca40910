// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar of the portfolio page.
//!
//! The bar shows the brand, one label per section, the sliding underline
//! below the labels and a thin scroll progress bar along its top edge.
//! Labels and their row are wrapped in layout probes so the indicator can
//! measure them.

use crate::i18n::fluent::I18n;
use crate::nav::{NavIndicator, NavItem, UnderlineState};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::layout_probe;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Rectangle,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [NavItem],
    pub indicator: &'a NavIndicator,
    /// Fraction of the page scrolled past, in `[0, 1]`.
    pub scroll_progress: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    /// A label was pressed.
    Navigate(String),
    /// A label was laid out at new window coordinates.
    ButtonMeasured(String, Rectangle),
    /// The row holding the labels was laid out at new window coordinates.
    ContainerMeasured(Rectangle),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("nav-brand"))
        .size(typography::TITLE_SM)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        });

    let links = Column::new()
        .push(build_labels(&ctx))
        .push(build_underline(ctx.indicator.displayed()));

    let bar = Row::new()
        .align_y(Vertical::Center)
        .padding([0.0, spacing::XL])
        .height(Length::Fill)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links);

    let content = Column::new()
        .push(build_progress(ctx.scroll_progress))
        .push(bar);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

/// One probed button per navigation item, inside a probed row.
fn build_labels<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let row = ctx.items.iter().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, item| {
            let active = ctx.indicator.is_active(&item.id);
            let label = button(Text::new(item.label.as_str()).size(typography::BODY))
                .on_press(Message::Navigate(item.id.clone()))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(active));

            let id = item.id.clone();
            row.push(layout_probe(label, move |bounds| {
                Message::ButtonMeasured(id.clone(), bounds)
            }))
        },
    );

    layout_probe(row, Message::ContainerMeasured).into()
}

/// The underline, offset from the start of the label row.
fn build_underline<'a>(state: UnderlineState) -> Element<'a, Message> {
    let alpha = state.opacity.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    let line = container(Space::new())
        .width(Length::Fixed(state.width.max(0.0)))
        .height(Length::Fixed(sizing::UNDERLINE_HEIGHT))
        .style(styles::container::accent_with_alpha(alpha));

    Row::new()
        .height(Length::Fixed(sizing::UNDERLINE_HEIGHT))
        .push(Space::new().width(Length::Fixed(state.left.max(0.0))))
        .push(line)
        .into()
}

/// Portion of the progress bar's width that is filled.
const PROGRESS_RESOLUTION: u16 = 1000;

fn progress_portions(progress: f32) -> (u16, u16) {
    let filled = (progress.clamp(0.0, 1.0) * f32::from(PROGRESS_RESOLUTION)).round() as u16;
    (filled, PROGRESS_RESOLUTION - filled)
}

fn build_progress<'a>(progress: f32) -> Element<'a, Message> {
    let (filled, rest) = progress_portions(progress);

    Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SCROLL_PROGRESS_HEIGHT))
        .push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .style(styles::container::accent),
        )
        .push(Space::new().width(Length::FillPortion(rest)))
        .into()
}
