// SPDX-License-Identifier: GPL-3.0-only

//! Character sets for the letter rows and the symbol keys.

use crate::app_settings::ADDITIONAL_KEY_COUNT;
use crate::error::KeyboardError;
use crate::layout::types::Language;

/// Digits of the optional numeric row.
pub const NUMBER_ROW: &str = "1234567890";

/// Extra keys appended to the numeric row for Russian.
pub const RUSSIAN_NUMBER_ROW_EXTRA: &[&str] = &["-", "_"];

/// The three standard symbol rows. Row three follows the symbol-set switch.
pub const STANDARD_SYMBOL_ROWS: [&str; 3] = ["\"!@#$%&", "'()-_=+", "\\;:~*/|"];

/// Initial user symbol set.
pub const DEFAULT_USER_KEYS: &str = "`~!@#$%^&*()-_=+/?><.";

/// The three letter rows for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRows {
    pub first: &'static str,
    pub second: &'static str,
    pub third: &'static str,
}

impl LetterRows {
    /// Returns the letter rows for the given language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                first: "qwertyuiop",
                second: "asdfghjkl",
                third: "zxcvbnm",
            },
            Language::Russian => Self {
                first: "йцукенгшщзхъ",
                second: "фывапролджэ",
                third: "ячсмитьбюё",
            },
        }
    }

    /// Number of letters in the first row, which sets the panel width.
    pub fn first_len(&self) -> usize {
        self.first.chars().count()
    }
}

/// Returns the standard symbol table as one string.
pub fn standard_symbols() -> String {
    STANDARD_SYMBOL_ROWS.concat()
}

/// Name of the symbol key at `index`: `a`, `b`, `c`, ...
pub fn symbol_key_name(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}

/// Position of a symbol key from its single-letter name.
pub fn symbol_key_index(name: &str) -> Option<usize> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ 'a'..='z'), None) => {
            let index = (c as u8 - b'a') as usize;
            (index < ADDITIONAL_KEY_COUNT).then_some(index)
        }
        _ => None,
    }
}

/// The user-supplied symbol set, always exactly [`ADDITIONAL_KEY_COUNT`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalKeys {
    chars: Vec<char>,
}

impl Default for AdditionalKeys {
    fn default() -> Self {
        Self {
            chars: DEFAULT_USER_KEYS.chars().collect(),
        }
    }
}

impl AdditionalKeys {
    /// Replaces the set with `value`.
    ///
    /// - exactly 21 characters: taken as is
    /// - more: the first 21 characters
    /// - fewer: `value` followed by the tail of the current set
    ///
    /// Empty or whitespace-only values are rejected.
    pub fn assign(&mut self, value: &str) -> Result<(), KeyboardError> {
        if value.trim().is_empty() {
            return Err(KeyboardError::configuration_with_suggestion(
                "additional keys must not be empty",
                format!("Provide up to {} characters", ADDITIONAL_KEY_COUNT),
            ));
        }

        let mut chars: Vec<char> = value.chars().take(ADDITIONAL_KEY_COUNT).collect();
        if chars.len() < ADDITIONAL_KEY_COUNT {
            chars.extend_from_slice(&self.chars[chars.len()..]);
        }
        self.chars = chars;

        Ok(())
    }

    /// Character at a slot.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Number of characters. Always 21.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The set as a string.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_has_one_char_per_slot() {
        assert_eq!(standard_symbols().chars().count(), ADDITIONAL_KEY_COUNT);
        assert_eq!(DEFAULT_USER_KEYS.chars().count(), ADDITIONAL_KEY_COUNT);
    }

    #[test]
    fn test_letter_rows() {
        let english = LetterRows::for_language(Language::English);
        assert_eq!(english.first_len(), 10);
        assert!(english.first.starts_with('q'));

        let russian = LetterRows::for_language(Language::Russian);
        assert_eq!(russian.first_len(), 12);
        assert!(russian.first.starts_with('й'));
        assert_eq!(russian.third.chars().count(), 10);
    }

    #[test]
    fn test_symbol_key_names() {
        assert_eq!(symbol_key_name(0), "a");
        assert_eq!(symbol_key_name(20), "u");
        assert_eq!(symbol_key_index("a"), Some(0));
        assert_eq!(symbol_key_index("u"), Some(20));
        assert_eq!(symbol_key_index("v"), None);
        assert_eq!(symbol_key_index("ab"), None);
        assert_eq!(symbol_key_index("A"), None);
    }

    /// Test: a string of exactly 21 characters replaces the set
    #[test]
    fn test_assign_exact_length() {
        let mut keys = AdditionalKeys::default();
        let value = "abcdefghijklmnopqrstu";
        keys.assign(value).unwrap();
        assert_eq!(keys.as_string(), value);
    }

    /// Test: longer strings are truncated to the first 21 characters
    #[test]
    fn test_assign_truncates() {
        let mut keys = AdditionalKeys::default();
        keys.assign("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(keys.as_string(), "abcdefghijklmnopqrstu");
        assert_eq!(keys.len(), ADDITIONAL_KEY_COUNT);
    }

    /// Test: shorter strings are padded with the tail of the previous set
    #[test]
    fn test_assign_pads_from_previous_tail() {
        let mut keys = AdditionalKeys::default();
        keys.assign("xyz").unwrap();

        let expected: String = "xyz"
            .chars()
            .chain(DEFAULT_USER_KEYS.chars().skip(3))
            .collect();
        assert_eq!(keys.as_string(), expected);
        assert_eq!(keys.len(), ADDITIONAL_KEY_COUNT);

        // Padding uses the set as it is now, not the built-in default
        keys.assign("1").unwrap();
        let expected: String = "1".chars().chain(expected.chars().skip(1)).collect();
        assert_eq!(keys.as_string(), expected);
    }

    /// Test: lengths are counted in characters, not bytes
    #[test]
    fn test_assign_counts_characters() {
        let mut keys = AdditionalKeys::default();
        keys.assign("ёжик").unwrap();
        assert_eq!(keys.len(), ADDITIONAL_KEY_COUNT);
        assert_eq!(keys.get(0), Some('ё'));
        assert_eq!(keys.get(4), DEFAULT_USER_KEYS.chars().nth(4));
    }

    #[test]
    fn test_assign_rejects_blank() {
        let mut keys = AdditionalKeys::default();
        let before = keys.clone();

        let err = keys.assign("").unwrap_err();
        assert!(err.is_configuration());
        let err = keys.assign("   \t").unwrap_err();
        assert!(err.is_configuration());

        assert_eq!(keys, before, "Rejected assignment must not change the set");
    }
}
