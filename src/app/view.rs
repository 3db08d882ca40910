// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current route
//! with the toast overlay on top.

use super::{Message, Route};
use crate::i18n::fluent::I18n;
use crate::ui::documentation;
use crate::ui::notifications::{self, Toast};
use crate::ui::portfolio;
use crate::ui::styles;
use iced::widget::{Container, Stack};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub portfolio: Option<&'a portfolio::State>,
    pub documentation: &'a documentation::State,
    pub notifications: &'a notifications::Manager,
    pub theme: &'a Theme,
}

/// Renders the current application view based on the active route.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.route, ctx.portfolio) {
        (Route::Portfolio, Some(state)) => state.view(ctx.i18n).map(Message::Portfolio),
        (Route::Portfolio, None) => Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into(),
        (Route::Documentation, _) => ctx
            .documentation
            .view(ctx.i18n, ctx.theme)
            .map(Message::Documentation),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(toasts)
        .into()
}
