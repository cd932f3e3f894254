// SPDX-License-Identifier: GPL-3.0-only

//! libcosmic renderer for the virtual keyboard.
//!
//! This module draws the key list of a [`VirtualKeyboard`] with libcosmic/Iced
//! widgets and turns pointer interaction into [`RendererMessage`]s. It holds no
//! state of its own: hover highlighting, checked toggles and labels all come
//! from the key descriptors maintained by the keyboard core.
//!
//! # Architecture
//!
//! - **theme**: ARGB to iced color conversion and container styles
//! - **key**: a single key (container + label inside a mouse area)
//! - **row**: grouping absolutely positioned keys into rows
//! - **panel**: the whole keyboard and message dispatch
//! - **message**: renderer message types
//!
//! # Usage
//!
//! ```rust,ignore
//! use vkeyboard::keyboard::VirtualKeyboard;
//! use vkeyboard::renderer::{apply_message, render_keyboard, RendererMessage};
//!
//! // In view():
//! render_keyboard(&self.keyboard).map(Message::Keyboard)
//!
//! // In update():
//! Message::Keyboard(message) => apply_message(&mut self.keyboard, message),
//! ```
//!
//! [`VirtualKeyboard`]: crate::keyboard::VirtualKeyboard

pub mod key;
pub mod message;
pub mod panel;
pub mod row;
pub mod theme;

pub use key::{display_label, render_key};
pub use message::RendererMessage;
pub use panel::{apply_message, render_keyboard};
pub use row::{KeyRow, group_rows, leading_gaps, render_row};
pub use theme::{key_style, panel_style, to_color};
