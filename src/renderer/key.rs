// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering.
//!
//! A key is a fixed-size container with a centered text label, wrapped in a
//! mouse area that reports clicks and pointer enter/exit. Colors come from the
//! key descriptor, which the keyboard core keeps current for hover and checked
//! state.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, container, mouse_area};

use crate::layout::{KeyDescriptor, unescape_mnemonic};
use crate::renderer::message::RendererMessage;
use crate::renderer::theme::key_style;

/// Renders a single key as an Element.
pub fn render_key<'a>(key: &KeyDescriptor) -> Element<'a, RendererMessage> {
    let label = widget::text(display_label(key)).size(f32::from(key.font_size));

    let styled = key.clone();
    let body = container(label)
        .width(Length::Fixed(key.bounds.width as f32))
        .height(Length::Fixed(key.bounds.height as f32))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(cosmic::style::Container::custom(move |theme| {
            key_style(&styled, theme)
        }));

    mouse_area(body)
        .on_press(RendererMessage::KeyPressed(key.name.clone()))
        .on_enter(RendererMessage::KeyHovered(key.name.clone()))
        .on_exit(RendererMessage::KeyUnhovered(key.name.clone()))
        .into()
}

/// Text drawn on the key.
///
/// Labels escape `&` as `&&`; the toolkit has no mnemonic prefix, so the
/// escape is collapsed for display.
pub fn display_label(key: &KeyDescriptor) -> String {
    unescape_mnemonic(&key.label)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::VirtualKeyboard;
    use crate::layout::MODE_SWITCH_KEY;

    #[test]
    fn test_display_label_unescapes_ampersand() {
        let keyboard = VirtualKeyboard::new();
        let mode = keyboard.key(MODE_SWITCH_KEY).unwrap();
        assert_eq!(mode.label, "&&123");
        assert_eq!(display_label(mode), "&123");
    }

    #[test]
    fn test_display_label_plain() {
        let keyboard = VirtualKeyboard::new();
        assert_eq!(display_label(keyboard.key("q").unwrap()), "q");
    }

    /// Test: Every key of both blocks produces an Element
    #[test]
    fn test_render_all_keys() {
        let mut keyboard = VirtualKeyboard::new();
        for key in keyboard.keys() {
            let _element = render_key(key);
        }

        keyboard.set_letters_block(false);
        for key in keyboard.keys() {
            let _element = render_key(key);
        }
    }
}
