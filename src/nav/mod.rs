// SPDX-License-Identifier: MPL-2.0
//! Scroll-synchronized navigation indicator.
//!
//! The indicator watches the vertical scroll position of the page, works out
//! which section the reader is in and how far along they are towards the
//! next one, and slides an underline between the matching navigation labels.
//! Geometry comes in through [`LayoutGeometry`] so the computation itself is
//! independent of the widget toolkit.

pub mod active;
pub mod frame_slot;
pub mod geometry;
pub mod indicator;
pub mod layout;
pub mod spring;
pub mod underline;

pub use active::{detect_active_section, ActiveSectionTracker, HighlightSource, REFERENCE_LINE};
pub use frame_slot::FrameSlot;
pub use geometry::{lerp, LayoutGeometry, Rect};
pub use indicator::{IndicatorSettings, NavIndicator};
pub use layout::MeasuredLayout;
pub use spring::{AnimatedUnderline, Spring, SpringConfig};
pub use underline::{
    compute, locate, resolve_section_tops, Measurement, NavItem, ScrollProgress, UnderlineState,
    DEFAULT_LOOKAHEAD,
};
