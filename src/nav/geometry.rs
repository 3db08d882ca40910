// SPDX-License-Identifier: MPL-2.0
//! Geometry primitives and the layout capability consumed by the indicator.
//!
//! The indicator never talks to a widget tree directly. Everything it needs
//! from the current layout goes through [`LayoutGeometry`], which keeps the
//! interpolation pure and lets tests feed synthetic rectangles.

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Expresses this rectangle in the coordinate space whose origin is the
    /// top-left corner of `origin`.
    #[must_use]
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect {
            x: self.x - origin.x,
            y: self.y - origin.y,
            ..*self
        }
    }

    /// Returns true when the horizontal line at `y` crosses the rectangle,
    /// edges included.
    #[must_use]
    pub fn spans_line(&self, y: f32) -> bool {
        self.top() <= y && self.bottom() >= y
    }
}

impl From<iced::Rectangle> for Rect {
    fn from(rectangle: iced::Rectangle) -> Self {
        Self::new(rectangle.x, rectangle.y, rectangle.width, rectangle.height)
    }
}

/// Read-only view of the live layout.
///
/// Implementations answer from the most recent layout pass; `None` means the
/// element is not mounted (yet) and callers must degrade gracefully.
pub trait LayoutGeometry {
    /// Top offset of a section relative to the start of the document.
    fn section_top(&self, id: &str) -> Option<f32>;

    /// Bounds of a section relative to the top of the viewport.
    fn section_rect(&self, id: &str) -> Option<Rect>;

    /// Bounds of a navigation button, in the same space as [`container_rect`].
    ///
    /// [`container_rect`]: LayoutGeometry::container_rect
    fn button_rect(&self, id: &str) -> Option<Rect>;

    /// Bounds of the element holding all navigation buttons.
    fn container_rect(&self) -> Option<Rect>;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f32;
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
