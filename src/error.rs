// SPDX-License-Identifier: GPL-3.0-only

//! Error type for keyboard operations.
//!
//! Every mutating operation on [`VirtualKeyboard`](crate::keyboard::VirtualKeyboard)
//! fails synchronously with a [`KeyboardError`]. Nothing is retried and nothing
//! is rolled back: a failure is reported to the caller of the operation.

use std::fmt;

/// Error type for keyboard operations.
///
/// Follows the canonical error struct pattern with context fields so that the
/// `Display` output tells the caller what was rejected and, where useful, how
/// to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardError {
    /// An argument was empty, whitespace-only, or otherwise unusable.
    InvalidArgument {
        /// Name of the rejected argument
        argument: &'static str,
        /// Human-readable description of the problem
        message: String,
    },

    /// A configuration value was rejected at assignment.
    Configuration {
        /// Human-readable description of the problem
        message: String,
        /// Optional suggestion for fixing the value
        suggestion: Option<String>,
    },

    /// A control the operation relies on is not part of the current layout.
    MissingControl {
        /// Name of the missing control
        name: String,
    },

    /// A key event referenced a name that is not in the current layout.
    UnknownKey {
        /// Name of the key
        name: String,
    },
}

impl KeyboardError {
    /// Creates an invalid-argument error for an empty or null text argument.
    pub fn empty_argument(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            message: "argument must not be empty".into(),
        }
    }

    /// Creates an invalid-argument error for a blank (whitespace-only) name.
    pub fn blank_argument(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            message: "argument must contain a meaningful value".into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates a configuration error with a suggestion.
    pub fn configuration_with_suggestion(
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Creates a missing-control error.
    pub fn missing_control(name: impl Into<String>) -> Self {
        Self::MissingControl { name: name.into() }
    }

    /// Creates an unknown-key error.
    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::UnknownKey { name: name.into() }
    }

    /// Returns `true` for invalid-argument failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for configuration failures.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

impl fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyboardError::InvalidArgument { argument, message } => {
                write!(f, "Invalid argument '{}': {}", argument, message)?;
            }
            KeyboardError::Configuration {
                message,
                suggestion,
            } => {
                write!(f, "Configuration error: {}", message)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            KeyboardError::MissingControl { name } => {
                write!(f, "Control '{}' does not exist in the current layout", name)?;
            }
            KeyboardError::UnknownKey { name } => {
                write!(f, "Unknown key '{}'", name)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for KeyboardError {}

// ============================================================================
// Tests
// ============================================================================
