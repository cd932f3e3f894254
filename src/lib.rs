// SPDX-License-Identifier: GPL-3.0-only

//! VKeyboard - An on-screen virtual keyboard for COSMIC
//!
//! This crate provides a clickable keyboard with English and Russian letter
//! layouts, a numeric/symbol block and a user-defined symbol set. Text typed
//! on the keyboard is appended to every subscribed text target.
//!
//! # Architecture
//!
//! The keyboard core is toolkit independent:
//!
//! 1. **Layout engine** (`layout`): computes every key's position, size and
//!    label from the language, block mode, numeric-row flag and key size.
//!
//! 2. **Keyboard** (`keyboard`): owns the layout, the shift toggles, the
//!    subscribers and the event listeners, and handles key clicks.
//!
//! 3. **Renderer** (`renderer`): draws the keys with libcosmic and turns
//!    pointer interaction into messages for the keyboard.
//!
//! # Modules
//!
//! - `app`: Demo application and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants
//! - `config`: User configuration with cosmic_config persistence
//! - `error`: Error type for keyboard operations
//! - `i18n`: Localization support using fluent translations
//! - `input`: Shift state machine
//! - `keyboard`: The keyboard core, subscribers and events
//! - `layout`: Layout model and engine
//! - `renderer`: libcosmic renderer

pub mod app;
pub mod app_settings;
pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod keyboard;
pub mod layout;
pub mod renderer;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

pub use crate::error::KeyboardError;
pub use crate::keyboard::{KeyboardEvent, SharedTarget, TextBuffer, TextTarget, VirtualKeyboard};

// ============================================================================
// Integration Tests
// ============================================================================
