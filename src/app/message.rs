// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::ui::documentation;
use crate::ui::notifications;
use crate::ui::portfolio;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Portfolio(portfolio::Message),
    Documentation(documentation::Message),
    Navigate(Route),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Initial route path (e.g. `/documentation`).
    pub route: Option<String>,
    /// Content file replacing the embedded portfolio content.
    pub content: Option<PathBuf>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}
