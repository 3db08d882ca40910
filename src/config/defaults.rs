// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Navigation**: Reading-position lookahead of the underline
//! - **Animation**: Spring tuning, typing speed, smooth-scroll duration

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default distance below the scroll offset used as the reading position.
pub const DEFAULT_LOOKAHEAD_PX: f32 = 100.0;

/// Minimum lookahead.
pub const MIN_LOOKAHEAD_PX: f32 = 0.0;

/// Maximum lookahead.
pub const MAX_LOOKAHEAD_PX: f32 = 400.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default underline spring stiffness.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 300.0;

/// Default underline spring damping.
pub const DEFAULT_SPRING_DAMPING: f32 = 30.0;

/// Stiffness bounds. Outside of these the spring is either frozen or unstable
/// at 240 Hz integration.
pub const MIN_SPRING_STIFFNESS: f32 = 1.0;
pub const MAX_SPRING_STIFFNESS: f32 = 2000.0;

/// Damping bounds.
pub const MIN_SPRING_DAMPING: f32 = 1.0;
pub const MAX_SPRING_DAMPING: f32 = 200.0;

/// Default delay between two typed characters of the hero title.
pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 100;

/// Typing interval bounds.
pub const MIN_TYPING_INTERVAL_MS: u64 = 10;
pub const MAX_TYPING_INTERVAL_MS: u64 = 1000;

/// Default duration of a smooth scroll to a section.
pub const DEFAULT_SCROLL_DURATION_MS: u64 = 600;

/// Smooth scroll duration bounds (0 jumps immediately).
pub const MIN_SCROLL_DURATION_MS: u64 = 0;
pub const MAX_SCROLL_DURATION_MS: u64 = 3000;
