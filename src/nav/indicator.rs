// SPDX-License-Identifier: MPL-2.0
//! Lifecycle and scheduling of the navigation underline.
//!
//! The indicator owns the target [`UnderlineState`], the spring-smoothed
//! displayed state and the active section. The surrounding page forwards
//! events to it:
//!
//! - scroll and layout changes only *schedule* a recomputation, at most one
//!   runs per frame and it reads the latest layout;
//! - resizes recompute immediately;
//! - frames run the scheduled recomputation, then advance the spring.
//!
//! After [`NavIndicator::teardown`] every entry point is a no-op and
//! [`NavIndicator::wants_frames`] is false, so the page stops subscribing to
//! frames and window events.

use super::active::{ActiveSectionTracker, HighlightSource, REFERENCE_LINE};
use super::frame_slot::FrameSlot;
use super::geometry::LayoutGeometry;
use super::spring::{AnimatedUnderline, SpringConfig};
use super::underline::{compute, NavItem, ScrollProgress, UnderlineState, DEFAULT_LOOKAHEAD};
use std::time::Instant;

/// Tunables of the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSettings {
    /// Distance below the scroll offset treated as the reading position.
    pub lookahead: f32,
    /// Viewport-relative line used for active-section detection.
    pub reference_line: f32,
    pub highlight: HighlightSource,
    pub spring: SpringConfig,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            reference_line: REFERENCE_LINE,
            highlight: HighlightSource::default(),
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug)]
pub struct NavIndicator {
    items: Vec<NavItem>,
    settings: IndicatorSettings,
    mounted: bool,
    pending: FrameSlot<()>,
    target: UnderlineState,
    progress: ScrollProgress,
    animated: AnimatedUnderline,
    tracker: ActiveSectionTracker,
    recomputations: u64,
}

impl NavIndicator {
    pub fn new(items: Vec<NavItem>, settings: IndicatorSettings) -> Self {
        let tracker = ActiveSectionTracker::new(&items, settings.highlight);
        Self {
            items,
            settings,
            mounted: false,
            pending: FrameSlot::new(),
            target: UnderlineState::HIDDEN,
            progress: ScrollProgress::START,
            animated: AnimatedUnderline::new(settings.spring),
            tracker,
            recomputations: 0,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Starts listening and takes the initial measurement.
    pub fn mount<G>(&mut self, geometry: &G)
    where
        G: LayoutGeometry + ?Sized,
    {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(items = self.items.len(), "navigation indicator mounted");
        self.recompute(geometry);
    }

    /// Stops listening and drops any scheduled recomputation.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.pending.cancel();
        self.animated.pause();
        self.mounted = false;
        tracing::debug!(
            recomputations = self.recomputations,
            "navigation indicator torn down"
        );
    }

    /// Schedules a recomputation for the next frame. Returns false when not
    /// mounted.
    pub fn on_scroll(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.pending.request(());
        true
    }

    /// Layout moved under us (fonts loaded, content reflowed).
    pub fn on_layout_changed(&mut self) -> bool {
        self.on_scroll()
    }

    /// Recomputes right away.
    pub fn on_resize<G>(&mut self, geometry: &G)
    where
        G: LayoutGeometry + ?Sized,
    {
        if self.mounted {
            self.recompute(geometry);
        }
    }

    /// Runs the scheduled recomputation, if any, then advances the spring.
    /// Returns true when a recomputation happened.
    pub fn on_frame<G>(&mut self, now: Instant, geometry: &G) -> bool
    where
        G: LayoutGeometry + ?Sized,
    {
        if !self.mounted {
            return false;
        }

        let recomputed = self.pending.take().is_some();
        if recomputed {
            self.recompute(geometry);
        }

        self.animated.tick(now);
        if self.animated.is_settled() {
            self.animated.pause();
        }

        recomputed
    }

    /// Whether the page should keep subscribing to animation frames.
    pub fn wants_frames(&self) -> bool {
        self.mounted && (self.pending.is_pending() || !self.animated.is_settled())
    }

    /// Whether the page should keep subscribing to scroll and resize events.
    pub fn is_listening(&self) -> bool {
        self.mounted
    }

    pub fn target(&self) -> UnderlineState {
        self.target
    }

    pub fn displayed(&self) -> UnderlineState {
        self.animated.current()
    }

    pub fn progress(&self) -> ScrollProgress {
        self.progress
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.tracker.is_active(id)
    }

    /// Id of the highlighted navigation label.
    pub fn highlighted(&self) -> Option<&str> {
        self.tracker.active()
    }

    /// Number of full recomputations since creation.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn recompute<G>(&mut self, geometry: &G)
    where
        G: LayoutGeometry + ?Sized,
    {
        let measurement = compute(&self.items, geometry, self.settings.lookahead, self.target);
        self.recomputations += 1;
        self.progress = measurement.progress;

        if measurement.underline != self.target {
            self.target = measurement.underline;
            self.animated.retarget(self.target);
        }

        if self.tracker.update(
            &self.items,
            geometry,
            self.settings.reference_line,
            &self.progress,
        ) {
            tracing::trace!(section = ?self.tracker.active(), "active section changed");
        }
    }
}

impl Drop for NavIndicator {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::geometry::Rect;
    use crate::nav::layout::MeasuredLayout;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn items() -> Vec<NavItem> {
        vec![NavItem::new("a", "A"), NavItem::new("b", "B")]
    }

    fn layout() -> MeasuredLayout {
        let mut layout = MeasuredLayout::new();
        layout.record_content(Rect::new(0.0, 0.0, 800.0, 2000.0));
        layout.record_section("a", Rect::new(0.0, 0.0, 800.0, 1000.0));
        layout.record_section("b", Rect::new(0.0, 1000.0, 800.0, 1000.0));
        layout.record_container(Rect::new(0.0, 0.0, 300.0, 40.0));
        layout.record_button("a", Rect::new(0.0, 0.0, 40.0, 40.0));
        layout.record_button("b", Rect::new(100.0, 0.0, 60.0, 40.0));
        layout.set_scroll(0.0, 600.0, 2000.0);
        layout
    }

    #[test]
    fn mount_measures_immediately() {
        let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
        indicator.mount(&layout());

        assert_eq!(indicator.recomputations(), 1);
        // viewY = 100 is a tenth of the way from "a" to "b".
        assert_eq!(indicator.target(), UnderlineState::visible(10.0, 42.0));
        assert!(indicator.wants_frames());
    }

    #[test]
    fn scroll_before_mount_is_ignored() {
        let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
        assert!(!indicator.on_scroll());
        assert!(!indicator.wants_frames());
        assert!(!indicator.is_listening());
    }

    #[test]
    fn scrolls_coalesce_into_one_recomputation() {
        let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
        let mut layout = layout();
        indicator.mount(&layout);

        for offset in [100.0, 200.0, 400.0] {
            layout.set_scroll(offset, 600.0, 2000.0);
            indicator.on_scroll();
        }
        assert_eq!(indicator.recomputations(), 1);

        assert!(indicator.on_frame(Instant::now(), &layout));
        assert_eq!(indicator.recomputations(), 2);
        assert_abs_diff_eq!(indicator.progress().t, 0.5);
        assert!(!indicator.on_frame(Instant::now(), &layout));
        assert_eq!(indicator.recomputations(), 2);
    }

    #[test]
    fn teardown_cancels_pending_frame() {
        let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
        let layout = layout();
        indicator.mount(&layout);
        indicator.on_scroll();

        indicator.teardown();

        assert!(!indicator.on_frame(Instant::now(), &layout));
        assert_eq!(indicator.recomputations(), 1);
        assert!(!indicator.wants_frames());
        assert!(!indicator.is_listening());
    }

    #[test]
    fn displayed_state_springs_to_target() {
        let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
        let layout = layout();
        indicator.mount(&layout);

        let start = Instant::now();
        let mut frames = 0;
        while indicator.wants_frames() && frames < 300 {
            frames += 1;
            indicator.on_frame(start + Duration::from_millis(16 * frames), &layout);
        }

        assert!(!indicator.wants_frames());
        assert_eq!(indicator.displayed(), indicator.target());
    }
}
