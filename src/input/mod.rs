// SPDX-License-Identifier: GPL-3.0-only

//! Input state for the keyboard.
//!
//! Currently this is the shift state machine: two toggles (left and right)
//! that are OR-ed into a single letter case and released after each typed
//! character.

pub mod shift;

pub use shift::{ShiftCase, ShiftState};
