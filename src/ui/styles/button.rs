// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped call to action filled with the accent gradient.
pub fn gradient(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let (alpha, shadow) = match status {
        button::Status::Active => (opacity::OPAQUE, shadow::MD),
        button::Status::Hovered => (opacity::OPAQUE, shadow::LG),
        button::Status::Pressed => (opacity::OVERLAY_HOVER, shadow::NONE),
        button::Status::Disabled => (opacity::OVERLAY_MEDIUM, shadow::NONE),
    };

    button::Style {
        background: Some(scheme.accent_gradient(alpha)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Outlined button on a translucent surface (social links, secondary actions).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..scheme.accent_start
        },
        button::Status::Active | button::Status::Disabled => scheme.divider,
    };

    button::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: scheme.text_secondary,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation label. The active label uses the primary text
/// color; the others brighten on hover.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let text_color = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => scheme.text_primary,
            (false, _) => scheme.text_tertiary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Inline hyperlink-looking button.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.accent_end,
        button::Status::Active | button::Status::Disabled => scheme.accent_start,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_button_is_dimmed_when_disabled() {
        let theme = Theme::Dark;
        let active = gradient(&theme, button::Status::Active);
        let disabled = gradient(&theme, button::Status::Disabled);

        assert!(matches!(active.background, Some(Background::Gradient(_))));
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn active_nav_link_keeps_primary_text() {
        let theme = Theme::Dark;
        let scheme = ColorScheme::dark();

        let active = nav_link(true)(&theme, button::Status::Active);
        let idle = nav_link(false)(&theme, button::Status::Active);
        let hovered = nav_link(false)(&theme, button::Status::Hovered);

        assert_eq!(active.text_color, scheme.text_primary);
        assert_eq!(idle.text_color, scheme.text_tertiary);
        assert_eq!(hovered.text_color, scheme.text_primary);
    }

    #[test]
    fn ghost_border_lights_up_on_hover() {
        let theme = Theme::Light;
        let normal = ghost(&theme, button::Status::Active);
        let hover = ghost(&theme, button::Status::Hovered);
        assert_ne!(normal.border.color, hover.border.color);
    }
}
