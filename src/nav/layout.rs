// SPDX-License-Identifier: MPL-2.0
//! Layout snapshot assembled from layout-probe reports.
//!
//! Section probes live inside the scrollable, so their bounds are in content
//! space (they do not move while scrolling). Navigation probes live in the
//! fixed header and report window coordinates. Scroll events carry the offset
//! and the viewport and content sizes.

use super::geometry::{LayoutGeometry, Rect};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MeasuredLayout {
    content_origin: Option<Rect>,
    sections: HashMap<String, Rect>,
    buttons: HashMap<String, Rect>,
    container: Option<Rect>,
    scroll_offset: f32,
    viewport_height: f32,
    content_height: f32,
}

fn replace(slot: &mut Option<Rect>, rect: Rect) -> bool {
    if *slot == Some(rect) {
        false
    } else {
        *slot = Some(rect);
        true
    }
}

fn replace_keyed(map: &mut HashMap<String, Rect>, id: &str, rect: Rect) -> bool {
    match map.get_mut(id) {
        Some(existing) if *existing == rect => false,
        Some(existing) => {
            *existing = rect;
            true
        }
        None => {
            map.insert(id.to_owned(), rect);
            true
        }
    }
}

impl MeasuredLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the bounds of the scrollable content. Returns true on change.
    pub fn record_content(&mut self, rect: Rect) -> bool {
        replace(&mut self.content_origin, rect)
    }

    pub fn record_section(&mut self, id: &str, rect: Rect) -> bool {
        replace_keyed(&mut self.sections, id, rect)
    }

    pub fn record_button(&mut self, id: &str, rect: Rect) -> bool {
        replace_keyed(&mut self.buttons, id, rect)
    }

    pub fn record_container(&mut self, rect: Rect) -> bool {
        replace(&mut self.container, rect)
    }

    pub fn set_scroll(&mut self, offset: f32, viewport_height: f32, content_height: f32) {
        self.scroll_offset = offset.max(0.0);
        self.viewport_height = viewport_height;
        self.content_height = content_height;
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Reading progress through the whole page in `[0, 1]`, zero when the
    /// content fits in the viewport.
    pub fn scroll_progress(&self) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 {
            0.0
        } else {
            (self.scroll_offset / max).clamp(0.0, 1.0)
        }
    }

    /// Drops everything measured so far, for instance when the page unmounts.
    pub fn forget_all(&mut self) {
        *self = Self::default();
    }
}

impl LayoutGeometry for MeasuredLayout {
    fn section_top(&self, id: &str) -> Option<f32> {
        let origin = self.content_origin?;
        self.sections.get(id).map(|rect| rect.top() - origin.top())
    }

    fn section_rect(&self, id: &str) -> Option<Rect> {
        let top = self.section_top(id)?;
        let rect = self.sections.get(id)?;
        Some(Rect::new(rect.x, top - self.scroll_offset, rect.width, rect.height))
    }

    fn button_rect(&self, id: &str) -> Option<Rect> {
        self.buttons.get(id).copied()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn measured() -> MeasuredLayout {
        let mut layout = MeasuredLayout::new();
        layout.record_content(Rect::new(0.0, 0.0, 800.0, 3000.0));
        layout.record_section("hero", Rect::new(0.0, 0.0, 800.0, 700.0));
        layout.record_section("about", Rect::new(0.0, 700.0, 800.0, 900.0));
        layout
    }

    #[test]
    fn section_top_is_document_relative() {
        let mut layout = measured();
        layout.record_content(Rect::new(0.0, 40.0, 800.0, 3000.0));

        assert_eq!(layout.section_top("about"), Some(660.0));
        assert_eq!(layout.section_top("contact"), None);
    }

    #[test]
    fn section_rect_moves_with_scroll() {
        let mut layout = measured();
        layout.set_scroll(650.0, 600.0, 3000.0);

        let rect = layout.section_rect("about").expect("measured");
        assert_abs_diff_eq!(rect.top(), 50.0);
        assert_abs_diff_eq!(rect.bottom(), 950.0);
    }

    #[test]
    fn sections_need_content_origin() {
        let mut layout = MeasuredLayout::new();
        layout.record_section("hero", Rect::new(0.0, 0.0, 800.0, 700.0));
        assert_eq!(layout.section_top("hero"), None);
    }

    #[test]
    fn record_reports_changes_only() {
        let mut layout = MeasuredLayout::new();
        let rect = Rect::new(10.0, 10.0, 40.0, 20.0);

        assert!(layout.record_button("hero", rect));
        assert!(!layout.record_button("hero", rect));
        assert!(layout.record_button("hero", Rect::new(12.0, 10.0, 40.0, 20.0)));
        assert!(layout.record_container(rect));
        assert!(!layout.record_container(rect));
    }

    #[test]
    fn scroll_progress_is_clamped() {
        let mut layout = MeasuredLayout::new();
        layout.set_scroll(0.0, 800.0, 500.0);
        assert_abs_diff_eq!(layout.scroll_progress(), 0.0);

        layout.set_scroll(600.0, 800.0, 2000.0);
        assert_abs_diff_eq!(layout.scroll_progress(), 0.5);

        layout.set_scroll(5_000.0, 800.0, 2000.0);
        assert_abs_diff_eq!(layout.scroll_progress(), 1.0);
    }

    #[test]
    fn forget_all_clears_measurements() {
        let mut layout = measured();
        layout.forget_all();
        assert_eq!(layout.section_top("hero"), None);
        assert_eq!(layout.container_rect(), None);
    }
}
