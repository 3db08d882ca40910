// SPDX-License-Identifier: MPL-2.0
//! Portfolio page component encapsulating state and update logic.

use super::{about, contact, hero, projects, skills};
use crate::config::Config;
use crate::content::{PortfolioContent, SectionKind};
use crate::i18n::fluent::I18n;
use crate::nav::{LayoutGeometry, MeasuredLayout, NavIndicator, Rect};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::smooth_scroll::SmoothScroll;
use crate::ui::styles;
use crate::ui::widgets::layout_probe;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Column, Container, Id, Scrollable, Space, Stack};
use iced::{alignment, event, time, window, Element, Length, Rectangle, Size, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Identifier used for the page scrollable widget.
pub const SCROLLABLE_ID: &str = "portfolio-scrollable";
/// Tick rate of frame-driven work (indicator, smooth scroll).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const CARET_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Messages emitted by the page and its sections.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// The page scrollable moved or was resized.
    Scrolled(Viewport),
    /// The column holding every section was laid out.
    ContentMeasured(Rectangle),
    /// A section was laid out (content coordinates).
    SectionMeasured(String, Rectangle),
    Frame(Instant),
    WindowResized(Size),
    /// Smoothly scroll to the section with this id.
    ScrollTo(String),
    TypingTick,
    CaretBlink,
    Contact(contact::Message),
    /// Copy a link to the clipboard; `None` for links not published yet.
    CopyLink(Option<String>),
    OpenDocumentation,
}

/// Side effects the application should perform after handling a page message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    OpenDocumentation,
    Notify(Notification),
}

pub struct State {
    content: Arc<PortfolioContent>,
    indicator: NavIndicator,
    layout: MeasuredLayout,
    smooth_scroll: SmoothScroll,
    typing: hero::Typing,
    typing_interval: Duration,
    form: contact::Form,
}

impl State {
    #[must_use]
    pub fn new(content: Arc<PortfolioContent>, config: &Config) -> Self {
        let indicator = NavIndicator::new(content.navigation.clone(), config.indicator_settings());
        let typing = hero::Typing::new(content.owner.title.clone());
        Self {
            indicator,
            layout: MeasuredLayout::new(),
            smooth_scroll: SmoothScroll::new(config.animation.scroll_duration()),
            typing,
            typing_interval: config.animation.typing_interval(),
            form: contact::Form::new(),
            content,
        }
    }

    /// Starts the indicator. Called when the page becomes visible.
    pub fn mount(&mut self) {
        self.indicator.mount(&self.layout);
    }

    /// Stops the indicator and any running scroll. Called when the page is
    /// left; dropping the state has the same effect.
    pub fn teardown(&mut self) {
        self.smooth_scroll.cancel();
        self.indicator.teardown();
        self.layout.forget_all();
    }

    #[must_use]
    pub fn indicator(&self) -> &NavIndicator {
        &self.indicator
    }

    #[must_use]
    pub fn layout(&self) -> &MeasuredLayout {
        &self.layout
    }

    #[must_use]
    pub fn typing(&self) -> &hero::Typing {
        &self.typing
    }

    #[must_use]
    pub fn form(&self) -> &contact::Form {
        &self.form
    }

    /// Frames while something animates, window resizes while the indicator
    /// listens, and the hero timers.
    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.indicator.wants_frames() || self.smooth_scroll.is_running() {
            time::every(FRAME_INTERVAL).map(Message::Frame)
        } else {
            Subscription::none()
        };

        let resize = if self.indicator.is_listening() {
            event::listen_with(|event, _status, _window| match event {
                event::Event::Window(window::Event::Resized(size)) => {
                    Some(Message::WindowResized(size))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let typing = if self.typing.is_done() {
            Subscription::none()
        } else {
            time::every(self.typing_interval).map(|_| Message::TypingTick)
        };

        let caret = time::every(CARET_BLINK_INTERVAL).map(|_| Message::CaretBlink);

        Subscription::batch([frames, resize, typing, caret])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Navbar(navbar::Message::Navigate(id)) | Message::ScrollTo(id) => {
                self.scroll_to(&id);
                (Effect::None, Task::none())
            }
            Message::Navbar(navbar::Message::ButtonMeasured(id, bounds)) => {
                if self.layout.record_button(&id, Rect::from(bounds)) {
                    self.indicator.on_layout_changed();
                }
                (Effect::None, Task::none())
            }
            Message::Navbar(navbar::Message::ContainerMeasured(bounds)) => {
                if self.layout.record_container(Rect::from(bounds)) {
                    self.indicator.on_layout_changed();
                }
                (Effect::None, Task::none())
            }
            Message::ContentMeasured(bounds) => {
                if self.layout.record_content(Rect::from(bounds)) {
                    self.indicator.on_layout_changed();
                }
                (Effect::None, Task::none())
            }
            Message::SectionMeasured(id, bounds) => {
                if self.layout.record_section(&id, Rect::from(bounds)) {
                    self.indicator.on_layout_changed();
                }
                (Effect::None, Task::none())
            }
            Message::Scrolled(viewport) => {
                self.on_scrolled(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                );
                (Effect::None, Task::none())
            }
            Message::WindowResized(size) => {
                tracing::trace!(width = size.width, height = size.height, "window resized");
                self.indicator.on_resize(&self.layout);
                (Effect::None, Task::none())
            }
            Message::Frame(now) => {
                let task = match self.smooth_scroll.tick(now) {
                    Some(offset) => self.snap_to(offset),
                    None => Task::none(),
                };
                self.indicator.on_frame(now, &self.layout);
                (Effect::None, task)
            }
            Message::TypingTick => {
                self.typing.tick();
                (Effect::None, Task::none())
            }
            Message::CaretBlink => {
                self.typing.blink();
                (Effect::None, Task::none())
            }
            Message::Contact(message) => {
                let (event, task) = self.form.update(message);
                let effect = match event {
                    contact::Event::Sent => {
                        Effect::Notify(Notification::success("notification-form-sent"))
                    }
                    contact::Event::None => Effect::None,
                };
                (effect, task.map(Message::Contact))
            }
            Message::CopyLink(Some(url)) => {
                tracing::debug!(%url, "link copied");
                let notification = Notification::info("notification-link-copied").with_arg("url", url.clone());
                (Effect::Notify(notification), iced::clipboard::write(url))
            }
            Message::CopyLink(None) => (
                Effect::Notify(Notification::info("notification-link-missing")),
                Task::none(),
            ),
            Message::OpenDocumentation => (Effect::OpenDocumentation, Task::none()),
        }
    }

    /// Records the new scroll position. A position the running smooth scroll
    /// did not produce means the user took over, so the run stops.
    fn on_scrolled(&mut self, offset: f32, viewport_height: f32, content_height: f32) {
        self.smooth_scroll.observe(offset);
        self.layout.set_scroll(offset, viewport_height, content_height);
        self.indicator.on_scroll();
    }

    /// Starts a smooth scroll to the top of section `id`, clamped to the
    /// reachable range. Unmeasured sections are ignored.
    fn scroll_to(&mut self, id: &str) {
        let Some(top) = self.layout.section_top(id) else {
            tracing::debug!(section = id, "scroll target not measured yet");
            return;
        };
        let target = top.clamp(0.0, self.layout.max_scroll());
        self.smooth_scroll.start(self.layout.scroll_offset(), target);
    }

    fn snap_to(&self, offset: f32) -> Task<Message> {
        let max = self.layout.max_scroll();
        let relative_y = if max > 0.0 {
            (offset / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: relative_y,
            },
        )
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let sections = self
            .content
            .sections()
            .fold(Column::new().width(Length::Fill), |column, (kind, item)| {
                let id = item.id.clone();
                column.push(layout_probe(self.view_section(kind, i18n), move |bounds| {
                    Message::SectionMeasured(id.clone(), bounds)
                }))
            });

        let page = Scrollable::new(layout_probe(sections, Message::ContentMeasured))
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled);

        let navbar = navbar::view(navbar::ViewContext {
            i18n,
            items: self.indicator.items(),
            indicator: &self.indicator,
            scroll_progress: self.layout.scroll_progress(),
        })
        .map(Message::Navbar);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                Container::new(page)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::page),
            )
            .push(
                Column::new()
                    .push(navbar)
                    .push(Space::new().height(Length::Fill)),
            )
            .into()
    }

    fn view_section<'a>(&'a self, kind: SectionKind, i18n: &'a I18n) -> Element<'a, Message> {
        let content = &self.content;
        let body = match kind {
            SectionKind::Hero => {
                return hero::view(&content.owner, &self.typing, i18n, self.layout.viewport_height());
            }
            SectionKind::About => about::view(&content.about, i18n),
            SectionKind::Projects => projects::view(&content.projects, i18n),
            SectionKind::Skills => skills::view(&content.skills, i18n),
            SectionKind::Contact => {
                contact::view(&content.contact, &self.form, &content.owner.name, i18n)
            }
        };

        let inner = Container::new(body)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH);

        Container::new(inner)
            .width(Length::Fill)
            .padding([spacing::SECTION, spacing::XL])
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn state() -> State {
        let mut state = State::new(Arc::new(crate::content::embedded()), &Config::default());
        state.mount();
        state
    }

    fn measure(state: &mut State) {
        let ids = ["hero", "about", "projects", "skills", "contact"];
        let (_effect, _task) = state.handle_message(Message::ContentMeasured(Rectangle::new(
            iced::Point::ORIGIN,
            Size::new(1200.0, 5000.0),
        )));
        for (i, id) in ids.iter().enumerate() {
            let (_effect, _task) = state.handle_message(Message::SectionMeasured(
                (*id).to_string(),
                Rectangle::new(iced::Point::new(0.0, i as f32 * 1000.0), Size::new(1200.0, 1000.0)),
            ));
            let button = Rectangle::new(
                iced::Point::new(600.0 + i as f32 * 80.0, 20.0),
                Size::new(60.0, 32.0),
            );
            let (_effect, _task) = state.handle_message(Message::Navbar(
                navbar::Message::ButtonMeasured((*id).to_string(), button),
            ));
        }
        let container = Rectangle::new(iced::Point::new(600.0, 20.0), Size::new(400.0, 32.0));
        let (_effect, _task) = state.handle_message(Message::Navbar(
            navbar::Message::ContainerMeasured(container),
        ));
        state.layout.set_scroll(0.0, 800.0, 5000.0);
    }

    #[test]
    fn layout_reports_schedule_a_single_recomputation() {
        let mut state = state();
        let before = state.indicator().recomputations();
        measure(&mut state);
        assert_eq!(state.indicator().recomputations(), before);

        let (_effect, _task) = state.handle_message(Message::Frame(Instant::now()));
        assert_eq!(state.indicator().recomputations(), before + 1);
        // viewY = 100 is a tenth of the way from "hero" to "about".
        let target = state.indicator().target();
        assert_abs_diff_eq!(target.left, 8.0, epsilon = 1e-4);
        assert_abs_diff_eq!(target.width, 60.0, epsilon = 1e-4);
        assert_eq!(target.opacity, 1.0);
        assert_eq!(state.indicator().highlighted(), Some("hero"));
    }

    #[test]
    fn resize_recomputes_immediately() {
        let mut state = state();
        measure(&mut state);
        let before = state.indicator().recomputations();

        let (_effect, _task) = state.handle_message(Message::WindowResized(Size::new(1000.0, 700.0)));
        assert_eq!(state.indicator().recomputations(), before + 1);
    }

    #[test]
    fn nav_click_starts_smooth_scroll_to_section() {
        let mut state = state();
        measure(&mut state);

        let (_effect, _task) = state.handle_message(Message::Navbar(navbar::Message::Navigate("skills".into())));
        assert_eq!(state.smooth_scroll.target(), Some(3000.0));

        let (_effect, _task) = state.handle_message(Message::ScrollTo("unknown".into()));
        assert_eq!(state.smooth_scroll.target(), Some(3000.0));
    }

    #[test]
    fn scroll_target_is_clamped_to_reachable_range() {
        let mut state = state();
        measure(&mut state);
        state.layout.set_scroll(0.0, 1500.0, 5000.0);

        let (_effect, _task) = state.handle_message(Message::ScrollTo("contact".into()));
        assert_eq!(state.smooth_scroll.target(), Some(3500.0));
    }

    #[test]
    fn teardown_stops_everything() {
        let mut state = state();
        measure(&mut state);
        let (_effect, _task) = state.handle_message(Message::ScrollTo("about".into()));
        assert!(state.smooth_scroll.is_running());

        state.teardown();
        assert!(!state.smooth_scroll.is_running());
        assert!(!state.indicator().is_listening());
        assert!(!state.indicator().wants_frames());

        let before = state.indicator().recomputations();
        let (_effect, _task) = state.handle_message(Message::Frame(Instant::now()));
        let (_effect, _task) = state.handle_message(Message::WindowResized(Size::new(800.0, 600.0)));
        assert_eq!(state.indicator().recomputations(), before);
    }

    #[test]
    fn user_scroll_interrupts_smooth_scroll() {
        let mut state = state();
        measure(&mut state);
        let (_effect, _task) = state.handle_message(Message::ScrollTo("skills".into()));

        let t0 = Instant::now();
        let (_effect, _task) = state.handle_message(Message::Frame(t0));
        let (_effect, _task) = state.handle_message(Message::Frame(t0 + Duration::from_millis(200)));
        let snapped = 3000.0 * crate::ui::smooth_scroll::ease_in_out_cubic(200.0 / 600.0);
        state.on_scrolled(snapped, 800.0, 5000.0);
        assert!(state.smooth_scroll.is_running());

        state.on_scrolled(snapped - 250.0, 800.0, 5000.0);
        assert!(!state.smooth_scroll.is_running());
        assert_eq!(state.layout().scroll_offset(), snapped - 250.0);
    }

    #[test]
    fn copy_link_notifies() {
        let mut state = state();
        let (effect, _task) = state.handle_message(Message::CopyLink(Some("https://x.dev".into())));
        let Effect::Notify(notification) = effect else {
            panic!("expected a notification");
        };
        assert_eq!(notification.message_key(), "notification-link-copied");

        let (effect, _task) = state.handle_message(Message::CopyLink(None));
        assert!(matches!(effect, Effect::Notify(n) if n.message_key() == "notification-link-missing"));
    }

    #[test]
    fn footer_link_opens_documentation() {
        let mut state = state();
        let (effect, _task) = state.handle_message(Message::OpenDocumentation);
        assert!(matches!(effect, Effect::OpenDocumentation));
    }
}
