// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Component messages are forwarded to their owners; the effects they return
//! are translated here into route changes and notifications.

use super::{Message, Route};
use crate::config::Config;
use crate::content::PortfolioContent;
use crate::ui::documentation;
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio::{self, Effect as PortfolioEffect};
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub route: &'a mut Route,
    pub portfolio: &'a mut Option<portfolio::State>,
    pub content: &'a Arc<PortfolioContent>,
    pub config: &'a Config,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles portfolio page messages.
pub fn handle_portfolio_message(
    ctx: &mut UpdateContext<'_>,
    message: portfolio::Message,
) -> Task<Message> {
    let Some(state) = ctx.portfolio.as_mut() else {
        // Late messages (timers, the form delay) after the page was left.
        tracing::trace!(?message, "portfolio message without a mounted page");
        return Task::none();
    };

    let (effect, task) = state.handle_message(message);
    let task = task.map(Message::Portfolio);

    match effect {
        PortfolioEffect::None => task,
        PortfolioEffect::Notify(notification) => {
            ctx.notifications.push(notification);
            task
        }
        PortfolioEffect::OpenDocumentation => {
            Task::batch([task, handle_route_switch(ctx, Route::Documentation)])
        }
    }
}

/// Handles documentation screen messages.
pub fn handle_documentation_message(
    ctx: &mut UpdateContext<'_>,
    message: documentation::Message,
) -> Task<Message> {
    match message {
        documentation::Message::BackToPortfolio => handle_route_switch(ctx, Route::Portfolio),
        documentation::Message::LinkClicked(url) => {
            tracing::debug!(%url, "documentation link copied");
            ctx.notifications
                .push(Notification::info("notification-link-copied").with_arg("url", url.clone()));
            iced::clipboard::write(url)
        }
    }
}

/// Switches the active route, mounting the portfolio page when it is entered
/// and tearing it down when it is left.
pub fn handle_route_switch(ctx: &mut UpdateContext<'_>, target: Route) -> Task<Message> {
    if *ctx.route == target {
        return Task::none();
    }

    tracing::info!(from = %ctx.route, to = %target, "route changed");
    *ctx.route = target;

    match target {
        Route::Portfolio => {
            *ctx.portfolio = Some(mount_portfolio(ctx.content, ctx.config));
        }
        Route::Documentation => {
            if let Some(mut state) = ctx.portfolio.take() {
                state.teardown();
            }
        }
    }

    Task::none()
}

/// Builds a fresh portfolio page and starts its indicator.
pub fn mount_portfolio(content: &Arc<PortfolioContent>, config: &Config) -> portfolio::State {
    let mut state = portfolio::State::new(Arc::clone(content), config);
    state.mount();
    tracing::debug!("portfolio mounted");
    state
}
