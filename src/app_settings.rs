// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.vkeyboard.VKeyboard";

/// Smallest key width and height in pixels. Smaller requests are clamped up.
pub const MIN_KEY_SIZE: u32 = 38;

/// Largest key width and height in pixels. Larger requests are clamped down.
pub const MAX_KEY_SIZE: u32 = 512;

/// Default key width and height in pixels.
pub const DEFAULT_KEY_SIZE: u32 = 54;

/// Gap between neighbouring keys and around the panel edge, in pixels.
pub const KEY_GAP: u32 = 4;

/// Amount added to each color channel of a hovered or checked key.
pub const KEY_LIGHT_UP: u8 = 50;

/// Upper bound for each RGB channel of the key color.
///
/// Keeps `channel + KEY_LIGHT_UP` within `u8`.
pub const MAX_KEY_COLOR_CHANNEL: u8 = 205;

/// Number of slots in the additional (symbol) key set.
pub const ADDITIONAL_KEY_COUNT: usize = 21;

/// Height shared by the two text fields of the demo app.
pub const TEXT_AREA_HEIGHT: f32 = 160.0;

/// Resize border width in pixels.
pub const RESIZE_BORDER: f64 = 8.0;
