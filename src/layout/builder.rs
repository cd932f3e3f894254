// SPDX-License-Identifier: GPL-3.0-only

//! Layout engine: computes pixel geometry for every key.
//!
//! Given the language, block mode, numeric-row placement and key size, the
//! engine produces a [`KeyLayout`] holding every key and the panel size. The
//! keyboard replaces its previous key list with the result wholesale.
//!
//! All geometry is derived from the key width `w`, key height `h` and the fixed
//! gap `g` ([`KEY_GAP`]):
//!
//! ```text
//! panel width  = (n + 2)·w + (n + 3)·g     n = letters in the first row
//! panel height = rows·h + (rows + 1)·g     rows = 4, or 5 with the numeric row
//! ```

use crate::app_settings::{KEY_GAP, MAX_KEY_SIZE, MIN_KEY_SIZE};
use crate::layout::charset::{
    AdditionalKeys, LetterRows, NUMBER_ROW, RUSSIAN_NUMBER_ROW_EXTRA, STANDARD_SYMBOL_ROWS,
    standard_symbols, symbol_key_name,
};
use crate::layout::types::{
    BlockMode, KeyDescriptor, KeyLayout, KeyRole, Language, Rect, Rgba, ShiftSide, Size,
    escape_mnemonic,
};

/// Name of the backspace key.
pub const BACKSPACE_KEY: &str = "backspace";
/// Name of the enter key.
pub const ENTER_KEY: &str = "enter";
/// Name of the space bar.
pub const SPACE_KEY: &str = "space";
/// Name of the letters/additional switch.
pub const MODE_SWITCH_KEY: &str = "additional";
/// Name of the language key.
pub const LANGUAGE_KEY: &str = "language";
/// Name of the standard/user symbol-set switch.
pub const SYMBOL_SWITCH_KEY: &str = "switcher";

const LETTER_FONT: u16 = 14;
const BACKSPACE_FONT: u16 = 11;
const LANGUAGE_FONT: u16 = 12;
const MODE_SWITCH_FONT: u16 = 10;
const RIGHT_SHIFT_FONT: u16 = 13;

/// Keys to the right of the space bar in the bottom letter row, in key units.
const KEYS_RIGHT_OF_SPACE: u32 = 4;

/// Width of the space bar in the additional block, in key units.
const ADDITIONAL_SPACE_UNITS: u32 = 6;

/// Inputs of the layout engine.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams<'a> {
    pub language: Language,
    pub mode: BlockMode,
    pub separate_numeric_block: bool,
    pub key_size: Size,
    /// The user symbol set
    pub user_keys: &'a AdditionalKeys,
    /// Label symbol keys from `user_keys` instead of the standard table
    pub use_user_symbols: bool,
    pub key_color: Rgba,
    pub key_text_color: Rgba,
}

/// Clamps a key size to the supported range on both axes.
pub fn clamp_key_size(key_size: Size) -> Size {
    Size::new(
        key_size.width.clamp(MIN_KEY_SIZE, MAX_KEY_SIZE),
        key_size.height.clamp(MIN_KEY_SIZE, MAX_KEY_SIZE),
    )
}

/// Computes the panel size for a language and numeric-row placement.
///
/// The additional block uses the same size as the letters block it replaces.
/// The key size is clamped first.
pub fn panel_size(language: Language, separate_numeric_block: bool, key_size: Size) -> Size {
    let key_size = clamp_key_size(key_size);
    let n = LetterRows::for_language(language).first_len() as u32;
    let rows = if separate_numeric_block { 5 } else { 4 };

    Size::new(
        (n + 2) * key_size.width + (n + 3) * KEY_GAP,
        rows * key_size.height + (rows + 1) * KEY_GAP,
    )
}

/// Builds the full key layout.
pub fn build_layout(params: &LayoutParams<'_>) -> KeyLayout {
    let mut builder = LayoutBuilder::new(params);

    match params.mode {
        BlockMode::Letters => builder.letters_block(),
        BlockMode::Additional => builder.additional_block(),
    }

    tracing::debug!(
        "Built {:?} layout for {} with {} keys ({}x{})",
        params.mode,
        params.language,
        builder.keys.len(),
        builder.size.width,
        builder.size.height
    );

    KeyLayout {
        keys: builder.keys,
        size: builder.size,
    }
}

struct LayoutBuilder<'p, 'a> {
    params: &'p LayoutParams<'a>,
    key_size: Size,
    size: Size,
    keys: Vec<KeyDescriptor>,
}

impl<'p, 'a> LayoutBuilder<'p, 'a> {
    fn new(params: &'p LayoutParams<'a>) -> Self {
        Self {
            params,
            key_size: clamp_key_size(params.key_size),
            size: panel_size(
                params.language,
                params.separate_numeric_block,
                params.key_size,
            ),
            keys: Vec::new(),
        }
    }

    fn w(&self) -> u32 {
        self.key_size.width
    }

    fn h(&self) -> u32 {
        self.key_size.height
    }

    /// Horizontal distance between the left edges of neighbouring keys.
    fn step_x(&self) -> u32 {
        self.w() + KEY_GAP
    }

    /// Vertical distance between the top edges of neighbouring rows.
    fn step_y(&self) -> u32 {
        self.h() + KEY_GAP
    }

    /// Width of a key that stretches from `x` to the right panel edge.
    fn fill_to_edge(&self, x: u32) -> u32 {
        self.size.width.saturating_sub(x + KEY_GAP)
    }

    fn push(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        value: Option<String>,
        role: KeyRole,
        bounds: Rect,
        font_size: u16,
        checked: bool,
    ) {
        let background = if checked {
            self.params.key_color.lit()
        } else {
            self.params.key_color
        };

        self.keys.push(KeyDescriptor {
            name: name.into(),
            label: label.into(),
            value,
            role,
            bounds,
            font_size,
            background,
            foreground: self.params.key_text_color,
            checked,
            hovered: false,
        });
    }

    /// A one-unit character key named after its text.
    fn character(&mut self, text: &str, x: u32, y: u32) {
        self.named_character(text, text, x, y);
    }

    fn named_character(&mut self, name: &str, text: &str, x: u32, y: u32) {
        let bounds = Rect::new(x, y, self.w(), self.h());
        self.push(
            name,
            escape_mnemonic(text),
            Some(text.to_string()),
            KeyRole::Character,
            bounds,
            LETTER_FONT,
            false,
        );
    }

    /// Places one key per character starting at `x`; returns the next free `x`.
    fn character_run(&mut self, chars: &str, mut x: u32, y: u32) -> u32 {
        for c in chars.chars() {
            self.character(&c.to_string(), x, y);
            x += self.step_x();
        }
        x
    }

    // ========================================================================
    // Letters Block
    // ========================================================================

    fn letters_block(&mut self) {
        let language = self.params.language;
        let rows = LetterRows::for_language(language);
        let mut y = KEY_GAP;

        if self.params.separate_numeric_block {
            self.number_row(y);
            y += self.step_y();
        }

        self.first_row(y, rows.first);
        y += self.step_y();

        self.second_row(y, rows.second);
        y += self.step_y();

        let right_shift_label = match language {
            Language::English => "Shift",
            Language::Russian => "↑",
        };
        self.third_row(y, rows.third, right_shift_label);
        y += self.step_y();

        self.fourth_row(y, language.indicator());
    }

    fn number_row(&mut self, y: u32) {
        let mut x = self.character_run(NUMBER_ROW, KEY_GAP, y);

        if self.params.language == Language::Russian {
            for extra in RUSSIAN_NUMBER_ROW_EXTRA {
                self.character(extra, x, y);
                x += self.step_x();
            }
        }
    }

    fn first_row(&mut self, y: u32, letters: &str) {
        let x = self.character_run(letters, KEY_GAP, y);

        let bounds = Rect::new(x, y, self.w() * 2 + KEY_GAP, self.h());
        self.push(
            BACKSPACE_KEY,
            "BackSpace",
            None,
            KeyRole::Backspace,
            bounds,
            BACKSPACE_FONT,
            false,
        );
    }

    fn second_row(&mut self, y: u32, letters: &str) {
        let x = self.character_run(letters, KEY_GAP + self.w() / 2, y);

        let bounds = Rect::new(x, y, self.fill_to_edge(x), self.h());
        self.push(ENTER_KEY, "Enter", None, KeyRole::Enter, bounds, LETTER_FONT, false);
    }

    fn third_row(&mut self, y: u32, letters: &str, right_shift_label: &str) {
        let mut x = KEY_GAP;

        let bounds = Rect::new(x, y, self.w(), self.h());
        self.push(
            ShiftSide::Left.control_name(),
            "↑",
            None,
            KeyRole::Shift(ShiftSide::Left),
            bounds,
            LETTER_FONT,
            false,
        );
        x += self.step_x();

        x = self.character_run(letters, x, y);
        x = self.character_run(",.", x, y);

        let bounds = Rect::new(x, y, self.fill_to_edge(x), self.h());
        self.push(
            ShiftSide::Right.control_name(),
            right_shift_label,
            None,
            KeyRole::Shift(ShiftSide::Right),
            bounds,
            RIGHT_SHIFT_FONT,
            false,
        );
    }

    fn fourth_row(&mut self, y: u32, language_label: &str) {
        let mut x = KEY_GAP;

        self.mode_switch("&&123", x, y);
        x += self.step_x();

        x = self.character_run("?!", x, y);

        let right_width = self.step_x() * KEYS_RIGHT_OF_SPACE + KEY_GAP;
        let space_width = self.size.width.saturating_sub(right_width + x);
        self.space_bar(x, y, space_width);
        x += space_width + KEY_GAP;

        x = self.character_run("()", x, y);

        let bounds = Rect::new(x, y, self.fill_to_edge(x), self.h());
        self.push(
            LANGUAGE_KEY,
            language_label,
            None,
            KeyRole::Language,
            bounds,
            LANGUAGE_FONT,
            false,
        );
    }

    fn mode_switch(&mut self, label: &str, x: u32, y: u32) {
        let bounds = Rect::new(x, y, self.w(), self.h());
        self.push(
            MODE_SWITCH_KEY,
            label,
            None,
            KeyRole::ModeSwitch,
            bounds,
            MODE_SWITCH_FONT,
            false,
        );
    }

    fn space_bar(&mut self, x: u32, y: u32, width: u32) {
        let bounds = Rect::new(x, y, width, self.h());
        self.push(
            SPACE_KEY,
            " ",
            Some(" ".to_string()),
            KeyRole::Character,
            bounds,
            LETTER_FONT,
            false,
        );
    }

    // ========================================================================
    // Additional Block
    // ========================================================================

    fn additional_block(&mut self) {
        let mut y = KEY_GAP;

        // The numeric-row flag keeps the panel height; the top row stays empty.
        if self.params.separate_numeric_block {
            y += self.step_y();
        }

        self.numeric_pad(y);
        self.symbol_rows(y);

        let y = y + self.step_y() * 3;
        self.mode_switch("ABC", KEY_GAP, y);

        let x = KEY_GAP + self.step_x();
        let width = self.step_x() * ADDITIONAL_SPACE_UNITS - KEY_GAP;
        self.space_bar(x, y, width);
    }

    /// Right-aligned 3x3 digit grid with a wide zero underneath.
    fn numeric_pad(&mut self, top: u32) {
        let right_column = self.size.width.saturating_sub(KEY_GAP + self.w());
        let mut y = top;

        for row in [["9", "8", "7"], ["6", "5", "4"], ["3", "2", "1"]] {
            let mut x = right_column;
            for digit in row {
                self.character(digit, x, y);
                x = x.saturating_sub(self.step_x());
            }
            y += self.step_y();
        }

        let left_column = right_column.saturating_sub(self.step_x() * 2);
        let bounds = Rect::new(left_column, y, self.w() * 3 + KEY_GAP * 2, self.h());
        self.push(
            "0",
            "0",
            Some("0".to_string()),
            KeyRole::Character,
            bounds,
            LETTER_FONT,
            false,
        );
    }

    fn symbol_rows(&mut self, top: u32) {
        let table: Vec<char> = if self.params.use_user_symbols {
            self.params.user_keys.as_string().chars().collect()
        } else {
            standard_symbols().chars().collect()
        };

        let mut index = 0;
        let mut y = top;

        for (row, symbols) in STANDARD_SYMBOL_ROWS.iter().enumerate() {
            let mut x = KEY_GAP;

            if row == STANDARD_SYMBOL_ROWS.len() - 1 {
                let user = self.params.use_user_symbols;
                let bounds = Rect::new(x, y, self.w(), self.h());
                self.push(
                    SYMBOL_SWITCH_KEY,
                    if user { "←" } else { "→" },
                    None,
                    KeyRole::SymbolSetSwitch,
                    bounds,
                    LETTER_FONT,
                    user,
                );
                x += self.step_x();
            }

            for _ in symbols.chars() {
                let symbol = table.get(index).map(char::to_string).unwrap_or_default();
                self.named_character(&symbol_key_name(index), &symbol, x, y);
                index += 1;
                x += self.step_x();
            }

            y += self.step_y();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
