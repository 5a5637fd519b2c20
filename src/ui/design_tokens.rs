// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the sample screens.
//!
//! A trimmed-down token set: base palette, opacity levels, the 8px spacing
//! grid and the typography scale the two samples draw with.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);

    // Keyboard sample backdrop (the blue-gray clear color).
    pub const SLATE_800: Color = Color::from_rgb(0.2, 0.2, 0.3);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Translucent fill for the interface rectangle.
    pub const OVERLAY_SOFT: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Caption text drawn on the canvases.
    pub const CAPTION: f32 = 16.0;
    /// Orientation labels, matching the original sample's 24pt font.
    pub const LABEL: f32 = 24.0;
}
