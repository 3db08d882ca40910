// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::gradient::{self, Linear};
use iced::{Background, Color, Radians, Theme};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_glass: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Accent colors (start and end of the gradient)
    pub accent_start: Color,
    pub accent_end: Color,

    pub divider: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_glass: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::WHITE
            },

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            accent_start: palette::BLUE_600,
            accent_end: palette::PURPLE_600,

            divider: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: Color {
                a: opacity::OVERLAY_FAINT,
                ..palette::WHITE
            },
            surface_glass: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_tertiary: palette::GRAY_400,

            accent_start: palette::BLUE_500,
            accent_end: palette::PURPLE_500,

            divider: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        }
    }

    /// Picks the scheme matching the theme's background.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Left-to-right accent gradient, with its alpha scaled by `alpha`.
    #[must_use]
    pub fn accent_gradient(&self, alpha: f32) -> Background {
        let alpha = alpha.clamp(0.0, 1.0);
        let start = Color {
            a: self.accent_start.a * alpha,
            ..self.accent_start
        };
        let end = Color {
            a: self.accent_end.a * alpha,
            ..self.accent_end
        };
        Background::Gradient(gradient::Gradient::Linear(
            Linear::new(Radians(FRAC_PI_2))
                .add_stop(0.0, start)
                .add_stop(1.0, end),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
