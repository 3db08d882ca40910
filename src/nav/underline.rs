// SPDX-License-Identifier: MPL-2.0
//! Scroll-position to underline interpolation.
//!
//! Given the ordered navigation items and the current layout, this module
//! finds the section the reader is in, how far they are towards the next
//! one, and where the underline beneath the navigation labels should sit.
//! Everything here is a pure function of its inputs.

use super::geometry::{lerp, LayoutGeometry};
use serde::{Deserialize, Serialize};

/// Distance below the scroll offset used as the reading position. Matches
/// the height covered by the fixed navigation bar.
pub const DEFAULT_LOOKAHEAD: f32 = 100.0;

/// One entry of the navigation bar. `id` names the section it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Where the underline should be drawn, relative to the navigation container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UnderlineState {
    pub left: f32,
    pub width: f32,
    /// Either 0.0 (hidden) or 1.0 (visible).
    pub opacity: f32,
}

impl UnderlineState {
    /// Hidden underline at the origin, the state before the first measurement.
    pub const HIDDEN: Self = Self {
        left: 0.0,
        width: 0.0,
        opacity: 0.0,
    };

    #[must_use]
    pub fn visible(left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            opacity: 1.0,
        }
    }

    /// Same position, but hidden.
    #[must_use]
    pub fn hidden(self) -> Self {
        Self {
            opacity: 0.0,
            ..self
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Position of the reading line within the ordered sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    /// Index of the last section whose top has been reached.
    pub current: usize,
    /// Index the underline is travelling towards (`current` on the last item).
    pub next: usize,
    /// Fraction of the way from `current` to `next`, always within `[0, 1]`.
    pub t: f32,
}

impl ScrollProgress {
    pub const START: Self = Self {
        current: 0,
        next: 0,
        t: 0.0,
    };
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::START
    }
}

/// Result of a full recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub progress: ScrollProgress,
    pub underline: UnderlineState,
}

/// Document-top offset of each item's section, `+inf` when it cannot be
/// resolved so it is never considered reached.
pub fn resolve_section_tops<G>(items: &[NavItem], geometry: &G) -> Vec<f32>
where
    G: LayoutGeometry + ?Sized,
{
    items
        .iter()
        .map(|item| geometry.section_top(&item.id).unwrap_or(f32::INFINITY))
        .collect()
}

/// Locates `view_y` among the ordered section tops.
///
/// The scan stops at the first top below the reading line, so an
/// unresolved section hides every section after it.
#[must_use]
pub fn locate(view_y: f32, tops: &[f32]) -> ScrollProgress {
    if tops.is_empty() {
        return ScrollProgress::START;
    }

    let mut current = 0;
    for (index, top) in tops.iter().enumerate() {
        if view_y >= *top {
            current = index;
        } else {
            break;
        }
    }

    let last = tops.len() - 1;
    let next = (current + 1).min(last);

    let span = tops[next] - tops[current];
    let denominator = if span == 0.0 || span.is_nan() { 1.0 } else { span };
    let raw = (view_y - tops[current]) / denominator;
    let t = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };

    ScrollProgress { current, next, t }
}

/// Runs one complete measurement against the current layout.
///
/// `previous` is only used to keep the last position when the buttons cannot
/// be measured, so a hidden underline fades out in place.
pub fn compute<G>(
    items: &[NavItem],
    geometry: &G,
    lookahead: f32,
    previous: UnderlineState,
) -> Measurement
where
    G: LayoutGeometry + ?Sized,
{
    let view_y = geometry.scroll_offset() + lookahead;
    let tops = resolve_section_tops(items, geometry);
    let progress = locate(view_y, &tops);

    let underline = underline_for(items, geometry, progress).unwrap_or_else(|| previous.hidden());

    Measurement {
        progress,
        underline,
    }
}

fn underline_for<G>(items: &[NavItem], geometry: &G, progress: ScrollProgress) -> Option<UnderlineState>
where
    G: LayoutGeometry + ?Sized,
{
    let container = geometry.container_rect()?;
    let current = geometry.button_rect(&items.get(progress.current)?.id)?;
    let next = items
        .get(progress.next)
        .and_then(|item| geometry.button_rect(&item.id))
        .unwrap_or(current);

    let current = current.relative_to(&container);
    let next = next.relative_to(&container);

    Some(UnderlineState::visible(
        lerp(current.left(), next.left(), progress.t),
        lerp(current.width, next.width, progress.t),
    ))
}
