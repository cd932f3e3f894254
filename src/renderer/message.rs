// SPDX-License-Identifier: GPL-3.0-only

//! Renderer message types for key interactions.
//!
//! The renderer draws keys and reports what the pointer did to them. Each
//! message names the key it concerns; [`super::apply_message`] forwards it to
//! the keyboard core.

/// Messages emitted by the keyboard renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RendererMessage {
    /// A key was clicked. Contains the key name.
    KeyPressed(String),

    /// The pointer entered a key.
    KeyHovered(String),

    /// The pointer left a key.
    KeyUnhovered(String),

    /// No-op message.
    #[default]
    Noop,
}

impl RendererMessage {
    /// The key this message concerns, if any.
    pub fn key_name(&self) -> Option<&str> {
        match self {
            Self::KeyPressed(name) | Self::KeyHovered(name) | Self::KeyUnhovered(name) => {
                Some(name)
            }
            Self::Noop => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
