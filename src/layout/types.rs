// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the keyboard layout model.
//!
//! A layout is a flat, declarative list of [`KeyDescriptor`]s with pixel
//! geometry, produced by the [layout engine](crate::layout::builder) and drawn
//! by a toolkit adapter such as [`crate::renderer`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app_settings::{KEY_LIGHT_UP, MAX_KEY_COLOR_CHANNEL};

// ============================================================================
// Layout Axes
// ============================================================================

/// Input language of the letter rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// QWERTY rows with the `ENG` indicator
    #[default]
    English,
    /// ЙЦУКЕН rows with the `РУС` indicator
    Russian,
}

impl Language {
    /// Text shown on the language key of the bottom row.
    pub fn indicator(self) -> &'static str {
        match self {
            Language::English => "ENG",
            Language::Russian => "РУС",
        }
    }

    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Russian,
            Language::Russian => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Russian => write!(f, "Russian"),
        }
    }
}

/// Which block of keys is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    /// Letter rows for the current language
    #[default]
    Letters,
    /// Numeric pad and symbol rows
    Additional,
}

impl BlockMode {
    /// Returns the other block.
    pub fn toggled(self) -> Self {
        match self {
            BlockMode::Letters => BlockMode::Additional,
            BlockMode::Additional => BlockMode::Letters,
        }
    }
}

/// Left or right shift toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShiftSide {
    /// Shift at the start of the third letter row
    Left,
    /// Shift at the end of the third letter row
    Right,
}

impl ShiftSide {
    /// Name of the key that controls this side.
    pub fn control_name(self) -> &'static str {
        match self {
            ShiftSide::Left => "LShift",
            ShiftSide::Right => "RShift",
        }
    }

    /// Returns the opposite side.
    pub fn other(self) -> Self {
        match self {
            ShiftSide::Left => ShiftSide::Right,
            ShiftSide::Right => ShiftSide::Left,
        }
    }
}

/// What a key does when it is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Writes its value to the subscribers
    Character,
    /// Undoes the last write
    Backspace,
    /// Writes a line break
    Enter,
    /// Toggles one of the two shift controls
    Shift(ShiftSide),
    /// Switches between the letters and the additional block
    ModeSwitch,
    /// Switches between English and Russian
    Language,
    /// Switches the symbol keys between the standard and the user set
    SymbolSetSwitch,
}

impl KeyRole {
    /// Returns `true` for keys drawn as two-state toggles.
    pub fn is_toggle(self) -> bool {
        matches!(self, KeyRole::Shift(_) | KeyRole::SymbolSetSwitch)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Size in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle relative to the top-left corner of the panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

// ============================================================================
// Colors
// ============================================================================

/// 8-bit ARGB color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::from_argb(255, 255, 255, 255);

    /// Default key background.
    pub const DEFAULT_KEY: Rgba = Rgba::from_argb(180, 60, 60, 60);

    /// Default panel background.
    pub const DEFAULT_PANEL: Rgba = Rgba::from_argb(220, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Returns the color with `delta` added to each RGB channel, saturating at 255.
    #[must_use]
    pub fn lighten(self, delta: u8) -> Self {
        Self {
            a: self.a,
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
        }
    }

    /// The color used for hovered and checked keys.
    #[must_use]
    pub fn lit(self) -> Self {
        self.lighten(KEY_LIGHT_UP)
    }

    /// Returns `true` if any RGB channel is above the key color ceiling.
    pub fn exceeds_key_ceiling(&self) -> bool {
        self.r > MAX_KEY_COLOR_CHANNEL
            || self.g > MAX_KEY_COLOR_CHANNEL
            || self.b > MAX_KEY_COLOR_CHANNEL
    }
}

// ============================================================================
// Key Descriptors
// ============================================================================

/// A single positioned key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// Identifier, unique within a layout (e.g. `"q"`, `"space"`, `"LShift"`, `"a"`)
    pub name: String,
    /// Display text, with `&` escaped as `&&`
    pub label: String,
    /// Text written when a character key is clicked
    pub value: Option<String>,
    /// Click behaviour
    pub role: KeyRole,
    /// Position and size in pixels
    pub bounds: Rect,
    /// Font size in points
    pub font_size: u16,
    /// Current background color
    pub background: Rgba,
    /// Label color
    pub foreground: Rgba,
    /// Checked state of toggle keys
    pub checked: bool,
    /// Whether the pointer is over the key
    pub hovered: bool,
}

impl KeyDescriptor {
    /// Returns `true` if the label is a single alphabetic character.
    pub fn is_letter(&self) -> bool {
        let mut chars = self.label.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }

    /// Changes the case of a single-letter key's label and value.
    ///
    /// Keys that are not single letters are left untouched.
    pub fn set_upper_case(&mut self, upper: bool) {
        if !self.is_letter() {
            return;
        }

        let cased = if upper {
            self.label.to_uppercase()
        } else {
            self.label.to_lowercase()
        };

        if self.value.is_some() {
            self.value = Some(cased.clone());
        }
        self.label = cased;
    }
}

/// The output of the layout engine: every key plus the panel size.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    pub keys: Vec<KeyDescriptor>,
    pub size: Size,
}

impl KeyLayout {
    /// Returns the key with the given name.
    pub fn key(&self, name: &str) -> Option<&KeyDescriptor> {
        self.keys.iter().find(|key| key.name == name)
    }

    /// Returns the key with the given name mutably.
    pub fn key_mut(&mut self, name: &str) -> Option<&mut KeyDescriptor> {
        self.keys.iter_mut().find(|key| key.name == name)
    }

    /// Returns `true` if a key with the given name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.key(name).is_some()
    }
}

// ============================================================================
// Mnemonic Escaping
// ============================================================================

/// Escapes `&` as `&&` for toolkits that treat `&` as a mnemonic prefix.
pub fn escape_mnemonic(text: &str) -> String {
    text.replace('&', "&&")
}

/// Collapses `&&` back to `&` for toolkits without mnemonic prefixes.
pub fn unescape_mnemonic(label: &str) -> String {
    label.replace("&&", "&")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_key(label: &str) -> KeyDescriptor {
        KeyDescriptor {
            name: label.to_string(),
            label: label.to_string(),
            value: Some(label.to_string()),
            role: KeyRole::Character,
            bounds: Rect::new(4, 4, 54, 54),
            font_size: 14,
            background: Rgba::DEFAULT_KEY,
            foreground: Rgba::WHITE,
            checked: false,
            hovered: false,
        }
    }

    #[test]
    fn test_language_indicator_and_toggle() {
        assert_eq!(Language::English.indicator(), "ENG");
        assert_eq!(Language::Russian.indicator(), "РУС");
        assert_eq!(Language::English.toggled(), Language::Russian);
        assert_eq!(Language::Russian.toggled(), Language::English);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_block_mode_toggle() {
        assert_eq!(BlockMode::default(), BlockMode::Letters);
        assert_eq!(BlockMode::Letters.toggled(), BlockMode::Additional);
        assert_eq!(BlockMode::Additional.toggled(), BlockMode::Letters);
    }

    #[test]
    fn test_shift_side_control_names() {
        assert_eq!(ShiftSide::Left.control_name(), "LShift");
        assert_eq!(ShiftSide::Right.control_name(), "RShift");
        assert_eq!(ShiftSide::Left.other(), ShiftSide::Right);
    }

    /// Test: lightening saturates instead of wrapping
    #[test]
    fn test_rgba_lighten() {
        let lit = Rgba::DEFAULT_KEY.lit();
        assert_eq!(lit, Rgba::from_argb(180, 110, 110, 110));

        let bright = Rgba::from_argb(255, 250, 10, 0).lighten(50);
        assert_eq!(bright, Rgba::from_argb(255, 255, 60, 50));
    }

    #[test]
    fn test_rgba_key_ceiling() {
        assert!(!Rgba::from_argb(255, 205, 205, 205).exceeds_key_ceiling());
        assert!(Rgba::from_argb(255, 206, 0, 0).exceeds_key_ceiling());
        assert!(Rgba::from_argb(255, 0, 206, 0).exceeds_key_ceiling());
        assert!(Rgba::from_argb(255, 0, 0, 206).exceeds_key_ceiling());
        // Alpha is not constrained
        assert!(!Rgba::from_argb(255, 0, 0, 0).exceeds_key_ceiling());
    }

    #[test]
    fn test_is_letter() {
        assert!(letter_key("q").is_letter());
        assert!(letter_key("й").is_letter());
        assert!(!letter_key("1").is_letter());
        assert!(!letter_key(",").is_letter());
        assert!(!letter_key("ENG").is_letter());
        assert!(!letter_key(" ").is_letter());
    }

    /// Test: case changes apply to label and value of letters only
    #[test]
    fn test_set_upper_case() {
        let mut key = letter_key("ё");
        key.set_upper_case(true);
        assert_eq!(key.label, "Ё");
        assert_eq!(key.value.as_deref(), Some("Ё"));
        key.set_upper_case(false);
        assert_eq!(key.label, "ё");

        let mut digit = letter_key("7");
        digit.set_upper_case(true);
        assert_eq!(digit.label, "7");
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(4, 62, 112, 54);
        assert_eq!(rect.right(), 116);
        assert_eq!(rect.bottom(), 116);
    }

    #[test]
    fn test_mnemonic_escaping() {
        assert_eq!(escape_mnemonic("&"), "&&");
        assert_eq!(escape_mnemonic("&123"), "&&123");
        assert_eq!(unescape_mnemonic("&&123"), "&123");
        assert_eq!(unescape_mnemonic("a"), "a");
    }
}
