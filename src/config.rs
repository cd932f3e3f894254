// SPDX-License-Identifier: GPL-3.0-only

//! Persistent keyboard settings.
//!
//! The settings live in cosmic-config under [`APP_ID`](crate::app_settings::APP_ID)
//! and are watched by the demo application, which re-applies them to its
//! keyboard on every change.

use cosmic::cosmic_config;
use cosmic::cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

use crate::app_settings::DEFAULT_KEY_SIZE;
use crate::error::KeyboardError;
use crate::keyboard::VirtualKeyboard;
use crate::layout::charset::DEFAULT_USER_KEYS;
use crate::layout::{Language, Rgba};

/// User configuration that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Initial input language.
    pub language: Language,
    /// Show the digits as a separate row above the letters.
    pub separate_numeric_block: bool,
    pub key_width: u32,
    pub key_height: u32,
    /// User symbol set for the additional block.
    pub additional_user_keys: String,
    pub key_color: Rgba,
    pub key_text_color: Rgba,
    pub background_color: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
            separate_numeric_block: false,
            key_width: DEFAULT_KEY_SIZE,
            key_height: DEFAULT_KEY_SIZE,
            additional_user_keys: DEFAULT_USER_KEYS.to_string(),
            key_color: Rgba::DEFAULT_KEY,
            key_text_color: Rgba::WHITE,
            background_color: Rgba::DEFAULT_PANEL,
        }
    }
}

impl Config {
    /// Creates a keyboard configured from these settings.
    pub fn build_keyboard(&self) -> Result<VirtualKeyboard, KeyboardError> {
        let mut keyboard = VirtualKeyboard::new();
        self.apply(&mut keyboard)?;
        Ok(keyboard)
    }

    /// Applies these settings to an existing keyboard.
    ///
    /// Invalid values are rejected before anything is changed, so the
    /// keyboard is either fully updated or left as it was. The language is
    /// only set (and `LayoutChanged` only raised) when it differs.
    pub fn apply(&self, keyboard: &mut VirtualKeyboard) -> Result<(), KeyboardError> {
        self.validate()?;

        keyboard.set_additional_user_keys(&self.additional_user_keys)?;
        keyboard.set_key_color(self.key_color)?;
        keyboard.set_key_text_color(self.key_text_color);
        keyboard.set_background_color(self.background_color);
        keyboard.set_key_width(self.key_width);
        keyboard.set_key_height(self.key_height);
        keyboard.set_separate_numeric_block(self.separate_numeric_block);

        if keyboard.language() != self.language {
            keyboard.set_language(self.language);
        }

        tracing::debug!("Applied configuration to keyboard");
        Ok(())
    }

    /// Checks the values a keyboard would reject.
    pub fn validate(&self) -> Result<(), KeyboardError> {
        if self.additional_user_keys.trim().is_empty() {
            return Err(KeyboardError::configuration_with_suggestion(
                "additional_user_keys must not be blank",
                format!("Remove the entry to use the default set \"{}\"", DEFAULT_USER_KEYS),
            ));
        }

        if self.key_color.exceeds_key_ceiling() {
            return Err(KeyboardError::configuration(format!(
                "key_color ({}, {}, {}) is too bright for hover highlighting",
                self.key_color.r, self.key_color.g, self.key_color.b
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_settings::{MAX_KEY_SIZE, MIN_KEY_SIZE};

    #[test]
    fn test_default_matches_keyboard_defaults() {
        let keyboard = Config::default().build_keyboard().unwrap();
        let plain = VirtualKeyboard::new();

        assert_eq!(keyboard.panel_size(), plain.panel_size());
        assert_eq!(keyboard.keys(), plain.keys());
        assert_eq!(keyboard.additional_user_keys(), plain.additional_user_keys());
    }

    #[test]
    fn test_build_keyboard_applies_settings() {
        let config = Config {
            language: Language::Russian,
            separate_numeric_block: true,
            key_width: 10,
            key_height: 60,
            additional_user_keys: "xyz".to_string(),
            key_color: Rgba::from_argb(255, 0, 0, 100),
            key_text_color: Rgba::from_argb(255, 200, 200, 0),
            background_color: Rgba::from_argb(255, 1, 1, 1),
        };

        let keyboard = config.build_keyboard().unwrap();

        assert_eq!(keyboard.language(), Language::Russian);
        assert!(keyboard.is_separate_numeric_block());
        assert_eq!(keyboard.key_width(), MIN_KEY_SIZE, "Width is clamped");
        assert_eq!(keyboard.key_height(), 60);
        assert!(keyboard.additional_user_keys().starts_with("xyz"));
        assert_eq!(keyboard.key_color(), config.key_color);
        assert_eq!(keyboard.key_text_color(), config.key_text_color);
        assert_eq!(keyboard.background_color(), config.background_color);
    }

    /// Test: oversized stored key sizes are clamped instead of overflowing the panel
    #[test]
    fn test_huge_key_size_clamped() {
        let config = Config {
            key_width: 400_000_000,
            key_height: u32::MAX,
            ..Config::default()
        };

        let keyboard = config.build_keyboard().unwrap();

        assert_eq!(keyboard.key_width(), MAX_KEY_SIZE);
        assert_eq!(keyboard.key_height(), MAX_KEY_SIZE);
        assert!(keyboard.panel_size().width > MAX_KEY_SIZE);
    }

    /// Test: invalid settings leave the keyboard untouched
    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut keyboard = VirtualKeyboard::new();
        let config = Config {
            key_width: 80,
            key_color: Rgba::from_argb(255, 255, 255, 255),
            ..Config::default()
        };

        let err = config.apply(&mut keyboard).unwrap_err();

        assert!(err.is_configuration());
        assert_eq!(keyboard.key_width(), DEFAULT_KEY_SIZE);
    }

    #[test]
    fn test_blank_user_keys_rejected() {
        let config = Config {
            additional_user_keys: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().unwrap_err().is_configuration());
    }
}
