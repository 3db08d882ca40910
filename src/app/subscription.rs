// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! The portfolio page owns its own subscriptions (animation frames, window
//! resizes, hero timers); they only exist while the page is mounted, so
//! leaving the route drops every listener it registered.

use super::{Message, Route};
use crate::ui::portfolio;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the notification tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Forwards the portfolio subscriptions while the portfolio route is shown.
pub fn create_portfolio_subscription(
    route: Route,
    portfolio: Option<&portfolio::State>,
) -> Subscription<Message> {
    match (route, portfolio) {
        (Route::Portfolio, Some(state)) => state.subscription().map(Message::Portfolio),
        _ => Subscription::none(),
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
