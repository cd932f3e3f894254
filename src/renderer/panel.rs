// SPDX-License-Identifier: GPL-3.0-only

//! Panel rendering.
//!
//! The panel is a fixed-size container, sized by the layout engine and painted
//! with the keyboard background color. Rows are stacked top to bottom with
//! vertical spacers reproducing the gaps between them.

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{self, container};

use crate::keyboard::VirtualKeyboard;
use crate::renderer::message::RendererMessage;
use crate::renderer::row::{group_rows, render_row};
use crate::renderer::theme::panel_style;

/// Renders the whole keyboard.
pub fn render_keyboard<'a>(keyboard: &VirtualKeyboard) -> Element<'a, RendererMessage> {
    let size = keyboard.panel_size();
    let mut column = widget::column::column();
    let mut edge = 0;

    for row in group_rows(keyboard.keys()) {
        let gap = row.top.saturating_sub(edge);
        if gap > 0 {
            column = column.push(widget::Space::new(Length::Fill, Length::Fixed(gap as f32)));
        }
        column = column.push(render_row(&row));
        edge = row.bottom();
    }

    let background = keyboard.background_color();
    container(column)
        .width(Length::Fixed(size.width as f32))
        .height(Length::Fixed(size.height as f32))
        .class(cosmic::style::Container::custom(move |_theme| {
            panel_style(background)
        }))
        .into()
}

/// Forwards a renderer message to the keyboard.
///
/// Failures (for example Backspace with an empty undo buffer) are logged and
/// otherwise ignored, as a click has no caller to report them to.
pub fn apply_message(keyboard: &mut VirtualKeyboard, message: RendererMessage) {
    let result = match &message {
        RendererMessage::KeyPressed(name) => keyboard.press_key(name),
        RendererMessage::KeyHovered(name) => keyboard.hover_key(name),
        RendererMessage::KeyUnhovered(name) => keyboard.unhover_key(name),
        RendererMessage::Noop => Ok(()),
    };

    if let Err(e) = result {
        tracing::warn!("Ignoring {:?}: {}", message, e);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{SharedTarget, TextBuffer};
    use crate::layout::{BACKSPACE_KEY, Language, Rgba};

    #[test]
    fn test_render_keyboard_produces_element() {
        let mut keyboard = VirtualKeyboard::new();
        let _element = render_keyboard(&keyboard);

        keyboard.set_separate_numeric_block(true);
        keyboard.set_language(Language::Russian);
        let _element = render_keyboard(&keyboard);

        keyboard.set_letters_block(false);
        let _element = render_keyboard(&keyboard);
    }

    #[test]
    fn test_apply_key_pressed() {
        let buffer = TextBuffer::new("field").shared();
        let target: SharedTarget = buffer.clone();
        let mut keyboard = VirtualKeyboard::new();
        keyboard.add_subscriber(&target);

        apply_message(&mut keyboard, RendererMessage::KeyPressed("w".into()));
        apply_message(&mut keyboard, RendererMessage::KeyPressed("space".into()));

        assert_eq!(buffer.borrow().text(), "w ");
    }

    #[test]
    fn test_apply_hover_messages() {
        let mut keyboard = VirtualKeyboard::new();

        apply_message(&mut keyboard, RendererMessage::KeyHovered("e".into()));
        assert_eq!(
            keyboard.key("e").unwrap().background,
            Rgba::DEFAULT_KEY.lit()
        );

        apply_message(&mut keyboard, RendererMessage::KeyUnhovered("e".into()));
        assert_eq!(keyboard.key("e").unwrap().background, Rgba::DEFAULT_KEY);
    }

    /// Test: failures from the core are swallowed
    #[test]
    fn test_apply_ignores_failures() {
        let mut keyboard = VirtualKeyboard::new();

        apply_message(&mut keyboard, RendererMessage::KeyPressed(BACKSPACE_KEY.into()));
        apply_message(&mut keyboard, RendererMessage::KeyPressed("missing".into()));
        apply_message(&mut keyboard, RendererMessage::Noop);

        assert_eq!(keyboard.last_written(), "");
    }
}
