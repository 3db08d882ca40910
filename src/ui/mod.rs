// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`portfolio`] - The single-page portfolio with its animated navigation bar
//! - [`documentation`] - Rendered project documentation
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with the scroll-synchronized underline
//! - [`smooth_scroll`] - Eased scrolling towards a section anchor
//! - [`widgets`] - Custom Iced widgets (layout probe)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod documentation;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod smooth_scroll;
pub mod styles;
pub mod theming;
pub mod widgets;
