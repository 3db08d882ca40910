// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports the bounds of its content.
//!
//! Iced has no "get bounding rect" query, so elements whose geometry the
//! application needs (page sections, navigation labels) are wrapped in a
//! probe. Whenever the probe sees an event and its laid-out bounds differ
//! from the last ones it reported, it publishes `on_change(bounds)`.
//! Redraw requests count as events, so a new layout is picked up on the next
//! frame even when the user does nothing.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Bounds last published by a probe, kept across view rebuilds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ProbeState {
    reported: Option<Rectangle>,
}

impl ProbeState {
    /// Records `bounds` and returns true if they differ from the last report.
    fn observe(&mut self, bounds: Rectangle) -> bool {
        if self.reported == Some(bounds) {
            false
        } else {
            self.reported = Some(bounds);
            true
        }
    }
}

/// A widget that wraps content and reports its bounds when they change.
pub struct LayoutProbe<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_change: Box<dyn Fn(Rectangle) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> LayoutProbe<'a, Message, Theme, Renderer> {
    /// Creates a new `LayoutProbe` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_change: impl Fn(Rectangle) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_change: Box::new(on_change),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for LayoutProbe<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<ProbeState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(ProbeState::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();
        if tree.state.downcast_mut::<ProbeState>().observe(bounds) {
            shell.publish((self.on_change)(bounds));
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<LayoutProbe<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(probe: LayoutProbe<'a, Message, Theme, Renderer>) -> Self {
        Self::new(probe)
    }
}

/// Helper function to wrap `content` in a [`LayoutProbe`].
pub fn layout_probe<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_change: impl Fn(Rectangle) -> Message + 'a,
) -> LayoutProbe<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    LayoutProbe::new(content, on_change)
}
