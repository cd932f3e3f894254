// SPDX-License-Identifier: GPL-3.0-only

//! Shift state management for the letter keys.
//!
//! The keyboard has two shift toggles, one at each end of the third letter
//! row. They are OR-ed: while either is active the letters are upper case;
//! once both are released they are lower case. Shift is one-shot: typing a
//! character releases both toggles.
//!
//! # Example
//!
//! ```rust,ignore
//! use vkeyboard::input::{ShiftCase, ShiftState};
//! use vkeyboard::layout::ShiftSide;
//!
//! let mut state = ShiftState::new();
//!
//! state.toggle(ShiftSide::Left);
//! assert_eq!(state.case(), ShiftCase::Upper);
//!
//! // ... user types a letter ...
//!
//! state.release_all();
//! assert_eq!(state.case(), ShiftCase::Lower);
//! ```

use crate::layout::ShiftSide;
use std::collections::HashSet;

/// Letter case produced by the shift toggles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ShiftCase {
    #[default]
    Lower,
    Upper,
}

/// Tracks which shift toggles are active.
#[derive(Debug, Clone, Default)]
pub struct ShiftState {
    /// Set of currently active sides
    active: HashSet<ShiftSide>,
}

impl ShiftState {
    /// Creates a new `ShiftState` with both toggles released.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
        }
    }

    /// Activates a side.
    pub fn activate(&mut self, side: ShiftSide) {
        self.active.insert(side);
    }

    /// Deactivates a side.
    pub fn deactivate(&mut self, side: ShiftSide) {
        self.active.remove(&side);
    }

    /// Toggles a side.
    ///
    /// # Returns
    ///
    /// `true` if the side is now active, `false` if it is now released
    pub fn toggle(&mut self, side: ShiftSide) -> bool {
        if self.active.contains(&side) {
            self.deactivate(side);
            false
        } else {
            self.activate(side);
            true
        }
    }

    /// Checks if a side is currently active.
    #[must_use]
    pub fn is_active(&self, side: ShiftSide) -> bool {
        self.active.contains(&side)
    }

    /// Returns the letter case: upper while any side is active.
    #[must_use]
    pub fn case(&self) -> ShiftCase {
        if self.active.is_empty() {
            ShiftCase::Lower
        } else {
            ShiftCase::Upper
        }
    }

    /// Returns `true` while any side is active.
    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.case() == ShiftCase::Upper
    }

    /// Returns the active sides, left first.
    #[must_use]
    pub fn active_sides(&self) -> Vec<ShiftSide> {
        let mut sides: Vec<ShiftSide> = self.active.iter().copied().collect();
        sides.sort();
        sides
    }

    /// Releases both sides.
    ///
    /// Called after a character key is typed.
    pub fn release_all(&mut self) {
        self.active.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_deactivate() {
        let mut state = ShiftState::new();

        state.activate(ShiftSide::Left);
        assert!(state.is_active(ShiftSide::Left));
        assert!(!state.is_active(ShiftSide::Right));

        state.deactivate(ShiftSide::Left);
        assert!(!state.is_active(ShiftSide::Left));
    }

    #[test]
    fn test_toggle() {
        let mut state = ShiftState::new();

        assert!(state.toggle(ShiftSide::Right));
        assert!(state.is_active(ShiftSide::Right));

        assert!(!state.toggle(ShiftSide::Right));
        assert!(!state.is_active(ShiftSide::Right));
    }

    /// Test: either side forces upper case, both released gives lower case
    #[test]
    fn test_sides_are_ored() {
        let mut state = ShiftState::new();
        assert_eq!(state.case(), ShiftCase::Lower);

        state.toggle(ShiftSide::Left);
        assert_eq!(state.case(), ShiftCase::Upper);

        state.toggle(ShiftSide::Right);
        assert_eq!(state.case(), ShiftCase::Upper);

        // Releasing one side keeps upper case while the other is active
        state.toggle(ShiftSide::Left);
        assert_eq!(state.case(), ShiftCase::Upper);

        state.toggle(ShiftSide::Right);
        assert_eq!(state.case(), ShiftCase::Lower);
    }

    #[test]
    fn test_release_all() {
        let mut state = ShiftState::new();
        state.activate(ShiftSide::Left);
        state.activate(ShiftSide::Right);
        assert_eq!(state.active_sides(), vec![ShiftSide::Left, ShiftSide::Right]);

        state.release_all();

        assert!(!state.is_upper());
        assert!(state.active_sides().is_empty());
    }

    #[test]
    fn test_default() {
        let state = ShiftState::default();
        assert_eq!(state.case(), ShiftCase::Lower);
    }
}
