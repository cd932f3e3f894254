// SPDX-License-Identifier: GPL-3.0-only

//! Color and style helpers for the keyboard renderer.
//!
//! Keys carry their own ARGB colors, so the renderer does not read colors from
//! the desktop theme for them. The only themed element is the outline of a
//! checked toggle key, which uses the theme accent.

use cosmic::Theme;
use cosmic::iced::{Background, Border, Color, Shadow};
use cosmic::widget::container;

use crate::layout::{KeyDescriptor, Rgba};

/// Corner radius of a key.
pub const KEY_BORDER_RADIUS: f32 = 4.0;

/// Outline width of a checked toggle key.
pub const CHECKED_BORDER_WIDTH: f32 = 1.0;

/// Converts an ARGB color to an iced color.
pub fn to_color(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

/// Outline color of a checked toggle key.
pub fn checked_border_color(theme: &Theme) -> Color {
    Color::from(theme.cosmic().accent_color())
}

/// Container style of a key in its current state.
pub fn key_style(key: &KeyDescriptor, theme: &Theme) -> container::Style {
    let outlined = key.checked && key.role.is_toggle();
    let border_color = if outlined {
        checked_border_color(theme)
    } else {
        Color::TRANSPARENT
    };

    container::Style {
        background: Some(Background::Color(to_color(key.background))),
        border: Border {
            color: border_color,
            width: if outlined { CHECKED_BORDER_WIDTH } else { 0.0 },
            radius: KEY_BORDER_RADIUS.into(),
        },
        icon_color: None,
        text_color: Some(to_color(key.foreground)),
        shadow: Shadow::default(),
    }
}

/// Container style of the panel behind the keys.
pub fn panel_style(background: Rgba) -> container::Style {
    container::Style {
        background: Some(Background::Color(to_color(background))),
        border: Border::default(),
        icon_color: None,
        text_color: None,
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Tests
// ============================================================================
