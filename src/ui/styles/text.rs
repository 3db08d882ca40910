// SPDX-License-Identifier: MPL-2.0
//! Text color styles derived from the active color scheme.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_tertiary),
    }
}

/// Headings and highlighted values.
pub fn accent(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).accent_start),
    }
}
