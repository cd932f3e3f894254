// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout model and layout engine.
//!
//! This module describes what the keyboard looks like, independently of any
//! GUI toolkit: a flat list of positioned [`KeyDescriptor`]s plus the panel
//! size. Toolkit adapters (see [`crate::renderer`]) only draw what is described
//! here.
//!
//! # Layout Axes
//!
//! - **Language**: English (QWERTY) or Russian (ЙЦУКЕН) letter rows
//! - **Block mode**: letter rows, or the additional block with a numeric pad
//!   and three rows of symbol keys
//! - **Numeric row**: an optional row of digits above the letters
//! - **Key size**: width and height of a one-unit key, clamped between
//!   [`MIN_KEY_SIZE`](crate::app_settings::MIN_KEY_SIZE) and
//!   [`MAX_KEY_SIZE`](crate::app_settings::MAX_KEY_SIZE)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use vkeyboard::layout::{build_layout, AdditionalKeys, BlockMode, Language, LayoutParams, Rgba, Size};
//!
//! let user_keys = AdditionalKeys::default();
//! let layout = build_layout(&LayoutParams {
//!     language: Language::English,
//!     mode: BlockMode::Letters,
//!     separate_numeric_block: true,
//!     key_size: Size::new(54, 54),
//!     user_keys: &user_keys,
//!     use_user_symbols: false,
//!     key_color: Rgba::DEFAULT_KEY,
//!     key_text_color: Rgba::WHITE,
//! });
//!
//! for key in &layout.keys {
//!     println!("{} at {:?}", key.name, key.bounds);
//! }
//! ```
//!
//! # Symbol Keys
//!
//! The symbol keys of the additional block are named `a` through `u` by their
//! position. The label at a position comes from either the standard table or
//! the user set ([`AdditionalKeys`]), which always holds exactly 21 characters.

// Sub-modules
pub mod builder;
pub mod charset;
pub mod types;

// Re-export public API - Data structures
pub use types::{
    BlockMode, KeyDescriptor, KeyLayout, KeyRole, Language, Rect, Rgba, ShiftSide, Size,
    escape_mnemonic, unescape_mnemonic,
};

// Re-export public API - Character sets
pub use charset::{AdditionalKeys, LetterRows, symbol_key_index, symbol_key_name};

// Re-export public API - Layout engine
pub use builder::{
    BACKSPACE_KEY, ENTER_KEY, LANGUAGE_KEY, LayoutParams, MODE_SWITCH_KEY, SPACE_KEY,
    SYMBOL_SWITCH_KEY, build_layout, clamp_key_size, panel_size,
};
