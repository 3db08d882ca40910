// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio and the
//! documentation routes.
//!
//! The `App` struct wires together content, localization, configuration and
//! notifications, and owns the portfolio page while its route is active.

mod message;
pub mod paths;
mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::config::{self, Config};
use crate::content::{self, PortfolioContent};
use crate::i18n::fluent::I18n;
use crate::ui::documentation;
use crate::ui::notifications;
use crate::ui::portfolio;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    /// Present only while the portfolio route is shown.
    portfolio: Option<portfolio::State>,
    documentation: documentation::State,
    content: Arc<PortfolioContent>,
    config: Config,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` is detected here.
    theme: Theme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("portfolio_mounted", &self.portfolio.is_some())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called again, starting with default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and content, then shows the requested route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, config, config_warning);
        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(flags: Flags, config: Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (content, content_warning) = content::load(flags.content.as_deref());
        let content = Arc::new(content);
        let route = flags
            .route
            .as_deref()
            .map(Route::parse)
            .unwrap_or_default();
        let theme_mode = config.general.theme_mode;

        let mut notifications = notifications::Manager::new();
        // Show warnings for config/content loading issues
        for key in [config_warning, content_warning].into_iter().flatten() {
            notifications.push(notifications::Notification::warning(key));
        }

        let portfolio = match route {
            Route::Portfolio => Some(update::mount_portfolio(&content, &config)),
            Route::Documentation => None,
        };

        tracing::info!(
            %route,
            locale = %i18n.current_locale(),
            sections = content.navigation.len(),
            "application started"
        );

        App {
            i18n,
            route,
            portfolio,
            documentation: documentation::State::new(&content::documentation()),
            content,
            config,
            theme_mode,
            theme: theme_mode.theme(),
            notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.route {
            Route::Portfolio => format!("{} - {app_name}", self.content.owner.name),
            Route::Documentation => format!("{} - {app_name}", self.i18n.tr("footer-docs")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let portfolio_sub =
            subscription::create_portfolio_subscription(self.route, self.portfolio.as_ref());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([portfolio_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            route: &mut self.route,
            portfolio: &mut self.portfolio,
            content: &self.content,
            config: &self.config,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Portfolio(portfolio_message) => {
                update::handle_portfolio_message(&mut ctx, portfolio_message)
            }
            Message::Documentation(documentation_message) => {
                update::handle_documentation_message(&mut ctx, documentation_message)
            }
            Message::Navigate(target) => update::handle_route_switch(&mut ctx, target),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                // Tick notification manager to handle auto-dismiss
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            portfolio: self.portfolio.as_ref(),
            documentation: &self.documentation,
            notifications: &self.notifications,
            theme: &self.theme,
        })
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::LayoutGeometry;
    use crate::ui::navbar;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn app_with(flags: Flags) -> App {
        App::with_config(flags, Config::default(), None)
    }

    fn app() -> App {
        app_with(Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        })
    }

    #[test]
    fn starts_on_the_portfolio_with_a_mounted_indicator() {
        let app = app();
        assert_eq!(app.route(), Route::Portfolio);
        let portfolio = app.portfolio.as_ref().expect("portfolio mounted");
        assert!(portfolio.indicator().is_listening());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn route_flag_selects_the_initial_route() {
        let app = app_with(Flags {
            route: Some("/documentation".into()),
            ..Flags::default()
        });
        assert_eq!(app.route(), Route::Documentation);
        assert!(app.portfolio.is_none());

        let app = app_with(Flags {
            route: Some("/".into()),
            ..Flags::default()
        });
        assert_eq!(app.route(), Route::Portfolio);
    }

    #[test]
    fn footer_link_leaves_the_portfolio() {
        let mut app = app();
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenDocumentation));
        assert_eq!(app.route(), Route::Documentation);
        assert!(app.portfolio.is_none());
        assert_eq!(app.title(), format!("{} - {}", app.i18n.tr("footer-docs"), app.i18n.tr("window-title")));
    }

    #[test]
    fn back_to_portfolio_mounts_a_fresh_page() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Documentation));
        let _ = app.update(Message::Documentation(documentation::Message::BackToPortfolio));

        assert_eq!(app.route(), Route::Portfolio);
        let portfolio = app.portfolio.as_ref().expect("portfolio mounted");
        assert!(portfolio.indicator().is_listening());
        assert!(portfolio.layout().section_top("about").is_none());
    }

    #[test]
    fn navigating_to_the_current_route_keeps_the_page() {
        let mut app = app();
        let _ = app.update(Message::Portfolio(portfolio::Message::ScrollTo("about".into())));
        let before = app.portfolio.as_ref().map(|p| p.indicator().recomputations());
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let after = app.portfolio.as_ref().map(|p| p.indicator().recomputations());
        assert_eq!(before, after);
    }

    #[test]
    fn portfolio_messages_after_leaving_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Documentation));
        let _ = app.update(Message::Portfolio(portfolio::Message::Navbar(
            navbar::Message::Navigate("about".into()),
        )));
        assert!(app.portfolio.is_none());
        assert_eq!(app.route(), Route::Documentation);
    }

    #[test]
    fn copied_links_show_a_toast() {
        let mut app = app();
        let _ = app.update(Message::Portfolio(portfolio::Message::CopyLink(Some(
            "https://github.com".into(),
        ))));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn documentation_links_are_copied_with_a_toast() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Documentation));
        let _ = app.update(Message::Documentation(documentation::Message::LinkClicked(
            "https://iced.rs".into(),
        )));
        let keys: Vec<_> = app.notifications.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, vec!["notification-link-copied".to_string()]);
        assert_eq!(app.route(), Route::Documentation);
    }

    #[test]
    fn missing_content_file_warns_about_io() {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = app_with(Flags {
            content: Some(dir.path().join("absent.toml")),
            ..Flags::default()
        });
        let keys: Vec<_> = app.notifications.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, vec!["error-content-io".to_string()]);
    }

    #[test]
    fn rejected_content_file_warns_and_uses_embedded_content() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "not = [valid").expect("write");

        let app = app_with(Flags {
            content: Some(file.path().to_path_buf()),
            ..Flags::default()
        });
        assert!(app.notifications.has_notifications());
        assert_eq!(app.content.navigation.len(), content::embedded().navigation.len());
    }

    #[test]
    fn config_warning_is_shown_as_toast() {
        let app = App::with_config(
            Flags::default(),
            Config::default(),
            Some("notification-config-load-error".into()),
        );
        let keys: Vec<_> = app.notifications.visible().map(|n| n.message_key().to_string()).collect();
        assert_eq!(keys, vec!["notification-config-load-error".to_string()]);
    }
}
