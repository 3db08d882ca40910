// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the blue to purple accent pair
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let glass = Color {
    a: opacity::OVERLAY_HOVER,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.04, 0.04, 0.06);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Accent (blue scale)
    pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);

    // Accent (purple scale)
    pub const PURPLE_400: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_FAINT: f32 = 0.05;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 96.0; // 12 units, vertical padding of a page section
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the fixed navigation bar. The page reserves this much space
    /// above the hero content.
    pub const NAVBAR_HEIGHT: f32 = 72.0;

    /// Thickness of the navigation underline.
    pub const UNDERLINE_HEIGHT: f32 = 2.0;

    /// Thickness of the reading progress bar at the top of the window.
    pub const SCROLL_PROGRESS_HEIGHT: f32 = 3.0;

    /// Thickness of a skill level bar.
    pub const SKILL_BAR_HEIGHT: f32 = 8.0;

    /// Widest the page content grows before it is centered.
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

    /// Minimum height of the hero section.
    pub const HERO_MIN_HEIGHT: f32 = 640.0;

    pub const TEXTAREA_HEIGHT: f32 = 140.0;

    pub const CARD_WIDTH: f32 = 340.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero name
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: badges, chips, footer

    /// Hero name
    pub const DISPLAY: f32 = 56.0;

    /// Typed hero title
    pub const DISPLAY_SM: f32 = 28.0;

    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Card titles, brand
    pub const TITLE_MD: f32 = 22.0;

    /// Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Lead paragraphs
    pub const BODY_LG: f32 = 17.0;

    /// Standard body text
    pub const BODY: f32 = 15.0;

    /// Secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Chips, badges, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Card outlines, input fields, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::NAVBAR_HEIGHT > sizing::UNDERLINE_HEIGHT);
    assert!(sizing::UNDERLINE_HEIGHT > 0.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
