// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Radius**: border radii
//!
//! Tokens are designed to be consistent; maintain the ratios
//! (e.g. `MD = XS * 2`) when changing values.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

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
    pub const OVERLAY_HOVER: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    /// Toolbar action icons render at 32px, matching the toolbar icon size of
    /// the desktop client this window belongs to.
    pub const TOOLBAR_ICON: u16 = 32;
    pub const ICON_SM: u16 = 16;
    pub const ICON_MD: u16 = 24;
    /// Toolbar buttons expand vertically to this height so the account block
    /// and the General/Network block stay aligned.
    pub const TOOLBAR_BUTTON_HEIGHT: u16 = 64;
    /// Width budget for toolbar button labels; longer display names are
    /// elided to fit.
    pub const TOOLBAR_BUTTON_WIDTH: u16 = 104;
    /// Minimum width of the expanding spacer between the account block and
    /// the fixed block.
    pub const TOOLBAR_SPACER_MIN: u16 = 10;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn toolbar_button_is_taller_than_icon() {
        assert!(sizing::TOOLBAR_BUTTON_HEIGHT > sizing::TOOLBAR_ICON);
    }

    #[test]
    fn palette_grays_are_ordered() {
        assert!(palette::GRAY_100.r > palette::GRAY_200.r);
        assert!(palette::GRAY_200.r > palette::GRAY_400.r);
    }
}
