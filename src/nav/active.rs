// SPDX-License-Identifier: MPL-2.0
//! Active-section detection.
//!
//! A section is active when the horizontal reference line, 100 px below the
//! top of the viewport, crosses it. When nothing crosses the line (a gap
//! between sections, or nothing measured yet) the previous answer stays.

use super::geometry::LayoutGeometry;
use super::underline::{NavItem, ScrollProgress};
use serde::{Deserialize, Serialize};

/// Viewport-relative y coordinate a section must span to be active.
pub const REFERENCE_LINE: f32 = 100.0;

/// Returns the id of the first section, in navigation order, that spans
/// `line`.
pub fn detect_active_section<'a, G>(items: &'a [NavItem], geometry: &G, line: f32) -> Option<&'a str>
where
    G: LayoutGeometry + ?Sized,
{
    items
        .iter()
        .find(|item| {
            geometry
                .section_rect(&item.id)
                .is_some_and(|rect| rect.spans_line(line))
        })
        .map(|item| item.id.as_str())
}

/// Which computation decides the highlighted navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightSource {
    /// Section whose bounds span the reference line.
    #[default]
    Boundary,
    /// Section the underline is currently anchored to.
    Underline,
}

/// Remembers the active section between measurements.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    active: Option<String>,
    source: HighlightSource,
}

impl ActiveSectionTracker {
    /// Starts on the first item, which is where the page opens.
    pub fn new(items: &[NavItem], source: HighlightSource) -> Self {
        Self {
            active: items.first().map(|item| item.id.clone()),
            source,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Refreshes the active section. Returns true when it changed.
    pub fn update<G>(
        &mut self,
        items: &[NavItem],
        geometry: &G,
        line: f32,
        progress: &ScrollProgress,
    ) -> bool
    where
        G: LayoutGeometry + ?Sized,
    {
        let detected = match self.source {
            HighlightSource::Boundary => detect_active_section(items, geometry, line),
            HighlightSource::Underline => items.get(progress.current).map(|item| item.id.as_str()),
        };

        match detected {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_owned());
                true
            }
            _ => false,
        }
    }
}
