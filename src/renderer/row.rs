// SPDX-License-Identifier: GPL-3.0-only

//! Row rendering.
//!
//! The layout engine positions keys absolutely. The renderer recovers rows by
//! grouping keys that share a top edge, then lays each row out left to right
//! with fixed spacers filling the horizontal gaps between keys.

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

use crate::layout::KeyDescriptor;
use crate::renderer::key::render_key;
use crate::renderer::message::RendererMessage;

/// Keys sharing one top edge, ordered left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRow<'k> {
    /// Top edge in panel pixels
    pub top: u32,
    /// Tallest key in the row
    pub height: u32,
    pub keys: Vec<&'k KeyDescriptor>,
}

impl KeyRow<'_> {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Groups keys into rows, top to bottom.
pub fn group_rows(keys: &[KeyDescriptor]) -> Vec<KeyRow<'_>> {
    let mut rows: Vec<KeyRow<'_>> = Vec::new();

    for key in keys {
        match rows.iter_mut().find(|row| row.top == key.bounds.y) {
            Some(row) => {
                row.height = row.height.max(key.bounds.height);
                row.keys.push(key);
            }
            None => rows.push(KeyRow {
                top: key.bounds.y,
                height: key.bounds.height,
                keys: vec![key],
            }),
        }
    }

    rows.sort_by_key(|row| row.top);
    for row in &mut rows {
        row.keys.sort_by_key(|key| key.bounds.x);
    }
    rows
}

/// Horizontal gap in front of each key of a row.
///
/// The first gap is measured from the left panel edge, the others from the
/// right edge of the previous key.
pub fn leading_gaps(row: &KeyRow<'_>) -> Vec<u32> {
    let mut edge = 0;
    row.keys
        .iter()
        .map(|key| {
            let gap = key.bounds.x.saturating_sub(edge);
            edge = key.bounds.right();
            gap
        })
        .collect()
}

/// Renders a row of keys as a horizontal layout.
pub fn render_row<'a>(row: &KeyRow<'_>) -> Element<'a, RendererMessage> {
    let mut row_widget = widget::row::row();
    let height = Length::Fixed(row.height as f32);

    for (key, gap) in row.keys.iter().zip(leading_gaps(row)) {
        if gap > 0 {
            row_widget = row_widget.push(widget::Space::new(Length::Fixed(gap as f32), height));
        }
        row_widget = row_widget.push(render_key(key));
    }

    row_widget.into()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_settings::{DEFAULT_KEY_SIZE, KEY_GAP};
    use crate::keyboard::VirtualKeyboard;

    #[test]
    fn test_letters_block_has_four_rows() {
        let keyboard = VirtualKeyboard::new();
        let rows = group_rows(keyboard.keys());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].top, KEY_GAP);
        assert_eq!(rows[0].keys[0].name, "q");
        assert_eq!(rows[3].keys[0].name, "additional");

        let total: usize = rows.iter().map(|row| row.keys.len()).sum();
        assert_eq!(total, keyboard.keys().len(), "Every key lands in one row");
    }

    /// Test: keys in a row are ordered left to right and never overlap
    #[test]
    fn test_rows_are_ordered() {
        let mut keyboard = VirtualKeyboard::new();
        keyboard.set_letters_block(false);

        for row in group_rows(keyboard.keys()) {
            for pair in row.keys.windows(2) {
                assert!(pair[0].bounds.right() <= pair[1].bounds.x);
            }
        }
    }

    #[test]
    fn test_leading_gaps() {
        let keyboard = VirtualKeyboard::new();
        let rows = group_rows(keyboard.keys());

        assert!(leading_gaps(&rows[0]).iter().all(|gap| *gap == KEY_GAP));
        assert_eq!(
            leading_gaps(&rows[1])[0],
            KEY_GAP + DEFAULT_KEY_SIZE / 2,
            "Second letter row is indented by half a key"
        );
    }

    /// Test: the numeric pad is separated from the symbol keys by a wide gap
    #[test]
    fn test_additional_block_pad_gap() {
        let mut keyboard = VirtualKeyboard::new();
        keyboard.set_letters_block(false);
        let rows = group_rows(keyboard.keys());

        assert_eq!(rows.len(), 4);
        let first = &rows[0];
        let gaps = leading_gaps(first);
        let pad_index = first.keys.iter().position(|key| key.name == "7").unwrap();
        assert!(gaps[pad_index] > KEY_GAP);
    }

    #[test]
    fn test_empty_top_row_in_additional_block() {
        let mut keyboard = VirtualKeyboard::new();
        keyboard.set_separate_numeric_block(true);
        keyboard.set_letters_block(false);

        let rows = group_rows(keyboard.keys());
        assert_eq!(rows[0].top, KEY_GAP * 2 + DEFAULT_KEY_SIZE);
    }
}
