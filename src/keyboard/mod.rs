// SPDX-License-Identifier: GPL-3.0-only

//! The virtual keyboard core.
//!
//! [`VirtualKeyboard`] owns every piece of keyboard state: the layout axes, the
//! symbol sets, key size and colors, the shift toggles, the current key list,
//! the subscribers and the event listeners. It knows nothing about any GUI
//! toolkit. A renderer draws [`VirtualKeyboard::keys`] and reports clicks and
//! pointer movement back through [`press_key`](VirtualKeyboard::press_key),
//! [`hover_key`](VirtualKeyboard::hover_key) and
//! [`unhover_key`](VirtualKeyboard::unhover_key).
//!
//! # Text Routing
//!
//! ```rust,ignore
//! use vkeyboard::keyboard::{SharedTarget, TextBuffer, VirtualKeyboard};
//!
//! let notes: SharedTarget = TextBuffer::new("notes").shared();
//!
//! let mut keyboard = VirtualKeyboard::new();
//! keyboard.add_subscriber(&notes);
//! keyboard.on_event(|event| println!("{:?}", event));
//!
//! keyboard.write("hello")?;          // notes = "hello", TextAdded("hello")
//! keyboard.press_key("space")?;      // notes = "hello "
//! keyboard.undo()?;                  // notes = "hello", TextUndone(" ")
//! ```
//!
//! # Rebuilds
//!
//! Changing the language, block mode, numeric-row placement or key size
//! rebuilds the whole key list. A rebuild starts with both shift toggles
//! released. Shift, hover, color and symbol-set changes update the existing
//! keys in place.

pub mod events;
pub mod subscriber;

pub use events::{KeyboardEvent, ListenerId};
pub use subscriber::{SharedTarget, TextBuffer, TextTarget};

use crate::app_settings::{DEFAULT_KEY_SIZE, MAX_KEY_COLOR_CHANNEL, MAX_KEY_SIZE, MIN_KEY_SIZE};
use crate::error::KeyboardError;
use crate::input::{ShiftCase, ShiftState};
use crate::layout::charset::standard_symbols;
use crate::layout::{
    AdditionalKeys, BlockMode, KeyDescriptor, KeyLayout, KeyRole, Language, LayoutParams, Rgba,
    SYMBOL_SWITCH_KEY, ShiftSide, Size, build_layout, escape_mnemonic, symbol_key_index,
    unescape_mnemonic,
};
use events::EventListeners;
use subscriber::SubscriberList;

/// Line break written by the Enter key.
pub const NEW_LINE: &str = "\n";

/// On-screen keyboard state.
#[derive(Debug)]
pub struct VirtualKeyboard {
    language: Language,
    mode: BlockMode,
    separate_numeric_block: bool,
    user_additional_block: bool,
    additional_keys: AdditionalKeys,
    key_size: Size,
    key_color: Rgba,
    key_text_color: Rgba,
    background_color: Rgba,
    layout: KeyLayout,
    shift: ShiftState,
    subscribers: SubscriberList,
    listeners: EventListeners,
    /// Undo buffer: the most recently written text
    last_written: String,
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualKeyboard {
    /// Creates an English letters keyboard with default size and colors.
    pub fn new() -> Self {
        let mut keyboard = Self {
            language: Language::English,
            mode: BlockMode::Letters,
            separate_numeric_block: false,
            user_additional_block: false,
            additional_keys: AdditionalKeys::default(),
            key_size: Size::new(DEFAULT_KEY_SIZE, DEFAULT_KEY_SIZE),
            key_color: Rgba::DEFAULT_KEY,
            key_text_color: Rgba::WHITE,
            background_color: Rgba::DEFAULT_PANEL,
            layout: KeyLayout::default(),
            shift: ShiftState::new(),
            subscribers: SubscriberList::default(),
            listeners: EventListeners::default(),
            last_written: String::new(),
        };
        keyboard.rebuild();
        keyboard
    }

    /// Creates a keyboard with a user symbol set.
    pub fn with_additional_keys(additional_keys: &str) -> Result<Self, KeyboardError> {
        let mut keyboard = Self::new();
        keyboard.set_additional_user_keys(additional_keys)?;
        Ok(keyboard)
    }

    /// Creates a keyboard with a user symbol set and numeric-row placement.
    pub fn with_options(
        separate_numeric_block: bool,
        additional_keys: &str,
    ) -> Result<Self, KeyboardError> {
        let mut keyboard = Self::with_additional_keys(additional_keys)?;
        keyboard.set_separate_numeric_block(separate_numeric_block);
        Ok(keyboard)
    }

    // ========================================================================
    // Layout Properties
    // ========================================================================

    pub fn language(&self) -> Language {
        self.language
    }

    /// Sets the language, rebuilds and raises [`KeyboardEvent::LayoutChanged`].
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.rebuild();
        self.listeners.emit(&KeyboardEvent::LayoutChanged(language));
    }

    pub fn block_mode(&self) -> BlockMode {
        self.mode
    }

    pub fn set_block_mode(&mut self, mode: BlockMode) {
        self.mode = mode;
        self.rebuild();
    }

    /// `true` when the letter rows are shown, `false` for the additional block.
    pub fn is_letters_block(&self) -> bool {
        self.mode == BlockMode::Letters
    }

    pub fn set_letters_block(&mut self, letters: bool) {
        self.set_block_mode(if letters {
            BlockMode::Letters
        } else {
            BlockMode::Additional
        });
    }

    /// `true` when the digits are shown as a separate row above the letters.
    pub fn is_separate_numeric_block(&self) -> bool {
        self.separate_numeric_block
    }

    pub fn set_separate_numeric_block(&mut self, separate: bool) {
        self.separate_numeric_block = separate;
        self.rebuild();
    }

    /// `true` when the symbol keys show the user set.
    pub fn is_user_additional_block(&self) -> bool {
        self.user_additional_block
    }

    /// Switches the symbol keys between the standard and the user set.
    ///
    /// Symbol keys that are currently rendered are relabelled in place.
    pub fn set_user_additional_block(&mut self, user: bool) {
        self.user_additional_block = user;
        self.relabel_symbol_keys();
    }

    /// The user symbol set (21 characters).
    pub fn additional_user_keys(&self) -> String {
        self.additional_keys.as_string()
    }

    /// Replaces the user symbol set. See [`AdditionalKeys::assign`].
    pub fn set_additional_user_keys(&mut self, value: &str) -> Result<(), KeyboardError> {
        self.additional_keys.assign(value)?;
        if self.user_additional_block {
            self.relabel_symbol_keys();
        }
        Ok(())
    }

    // ========================================================================
    // Colors and Key Size
    // ========================================================================

    pub fn key_color(&self) -> Rgba {
        self.key_color
    }

    /// Sets the key background color.
    ///
    /// Each RGB channel must be at most 205 so that hover highlighting stays in range.
    pub fn set_key_color(&mut self, color: Rgba) -> Result<(), KeyboardError> {
        if color.exceeds_key_ceiling() {
            return Err(KeyboardError::configuration_with_suggestion(
                format!(
                    "RGB components must not exceed ({0}, {0}, {0}), got ({1}, {2}, {3})",
                    MAX_KEY_COLOR_CHANNEL, color.r, color.g, color.b
                ),
                "Use a darker key color",
            ));
        }

        self.key_color = color;
        for key in &mut self.layout.keys {
            key.background = current_background(key, color);
        }
        Ok(())
    }

    pub fn key_text_color(&self) -> Rgba {
        self.key_text_color
    }

    pub fn set_key_text_color(&mut self, color: Rgba) {
        self.key_text_color = color;
        for key in &mut self.layout.keys {
            key.foreground = color;
        }
    }

    /// Panel background color.
    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Rgba) {
        self.background_color = color;
    }

    pub fn key_width(&self) -> u32 {
        self.key_size.width
    }

    /// Sets the key width, clamped to [`MIN_KEY_SIZE`]..=[`MAX_KEY_SIZE`], and rebuilds.
    pub fn set_key_width(&mut self, width: u32) {
        self.key_size.width = width.clamp(MIN_KEY_SIZE, MAX_KEY_SIZE);
        self.rebuild();
    }

    pub fn key_height(&self) -> u32 {
        self.key_size.height
    }

    /// Sets the key height, clamped to [`MIN_KEY_SIZE`]..=[`MAX_KEY_SIZE`], and rebuilds.
    pub fn set_key_height(&mut self, height: u32) {
        self.key_size.height = height.clamp(MIN_KEY_SIZE, MAX_KEY_SIZE);
        self.rebuild();
    }

    // ========================================================================
    // Rendered Keys
    // ========================================================================

    /// Size of the keyboard panel in pixels.
    pub fn panel_size(&self) -> Size {
        self.layout.size
    }

    /// Keys of the current layout.
    pub fn keys(&self) -> &[KeyDescriptor] {
        &self.layout.keys
    }

    /// The key with the given name in the current layout.
    pub fn key(&self, name: &str) -> Option<&KeyDescriptor> {
        self.layout.key(name)
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn shift_case(&self) -> ShiftCase {
        self.shift.case()
    }

    pub fn is_shift_active(&self, side: ShiftSide) -> bool {
        self.shift.is_active(side)
    }

    // ========================================================================
    // Subscribers and Listeners
    // ========================================================================

    /// Subscribes a text target. The keyboard keeps only a weak reference.
    pub fn add_subscriber(&mut self, target: &SharedTarget) {
        self.subscribers.add(target);
    }

    /// Replaces the subscriber list.
    pub fn set_subscribers(&mut self, targets: &[SharedTarget]) {
        self.subscribers.replace(targets);
    }

    /// Names of the live subscribers in subscription order.
    pub fn subscribers(&self) -> Vec<String> {
        self.subscribers.names()
    }

    /// Removes the first subscriber with the given name.
    ///
    /// Unknown names are ignored. Blank names are rejected.
    pub fn remove_subscriber(&mut self, name: &str) -> Result<(), KeyboardError> {
        if name.trim().is_empty() {
            return Err(KeyboardError::blank_argument("name"));
        }

        if self.subscribers.remove(name) {
            tracing::debug!("Removed subscriber '{}'", name);
        }
        Ok(())
    }

    /// Registers an event listener.
    pub fn on_event(&mut self, listener: impl FnMut(&KeyboardEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters an event listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // ========================================================================
    // Text Routing
    // ========================================================================

    /// The undo buffer.
    pub fn last_written(&self) -> &str {
        &self.last_written
    }

    /// Appends `text` to every subscriber and raises [`KeyboardEvent::TextAdded`].
    pub fn write(&mut self, text: &str) -> Result<(), KeyboardError> {
        if text.is_empty() {
            return Err(KeyboardError::empty_argument("text"));
        }

        for target in self.subscribers.live() {
            target.borrow_mut().append(text);
        }
        self.last_written = text.to_string();

        self.listeners
            .emit(&KeyboardEvent::TextAdded(text.to_string()));
        Ok(())
    }

    /// Undoes the most recent write.
    ///
    /// Fails with an invalid-argument error when nothing has been written
    /// since the last undo.
    pub fn undo(&mut self) -> Result<(), KeyboardError> {
        let text = self.last_written.clone();
        self.undo_text(&text)
    }

    /// Removes `text` from the end of every subscriber that ends with it.
    ///
    /// Raises [`KeyboardError::InvalidArgument`] for empty text, otherwise
    /// raises [`KeyboardEvent::TextUndone`] and clears the undo buffer.
    pub fn undo_text(&mut self, text: &str) -> Result<(), KeyboardError> {
        if text.is_empty() {
            return Err(KeyboardError::empty_argument("text"));
        }

        for target in self.subscribers.live() {
            let mut target = target.borrow_mut();
            let trimmed = target.text().strip_suffix(text).map(str::to_string);
            if let Some(trimmed) = trimmed {
                target.set_text(trimmed);
            }
        }

        self.listeners
            .emit(&KeyboardEvent::TextUndone(text.to_string()));
        self.last_written.clear();
        Ok(())
    }

    /// Names of keys and subscribers whose text contains `substring`.
    ///
    /// Keys come first, in layout order, followed by subscribers.
    pub fn contains(&self, substring: &str) -> Result<Vec<String>, KeyboardError> {
        if substring.is_empty() {
            return Err(KeyboardError::empty_argument("substring"));
        }

        let mut names: Vec<String> = self
            .layout
            .keys
            .iter()
            .filter(|key| unescape_mnemonic(&key.label).contains(substring))
            .map(|key| key.name.clone())
            .collect();

        for target in self.subscribers.iter() {
            let target = target.borrow();
            if target.text().contains(substring) {
                names.push(target.name().to_string());
            }
        }

        Ok(names)
    }

    // ========================================================================
    // Key Events
    // ========================================================================

    /// Handles a click on the named key.
    pub fn press_key(&mut self, name: &str) -> Result<(), KeyboardError> {
        let key = self
            .layout
            .key(name)
            .ok_or_else(|| KeyboardError::unknown_key(name))?;
        let role = key.role;
        let value = key.value.clone();

        tracing::debug!("Key '{}' pressed ({:?})", name, role);

        match role {
            KeyRole::Character => {
                let value = value.unwrap_or_default();
                self.write(&value)?;
                if self.shift.is_upper() {
                    self.shift.release_all();
                    self.sync_shift_keys();
                }
                Ok(())
            }
            KeyRole::Backspace => self.undo(),
            KeyRole::Enter => self.write(NEW_LINE),
            KeyRole::Shift(side) => self.toggle_shift(side).map(|_| ()),
            KeyRole::ModeSwitch => {
                self.set_block_mode(self.mode.toggled());
                Ok(())
            }
            KeyRole::Language => {
                self.set_language(self.language.toggled());
                Ok(())
            }
            KeyRole::SymbolSetSwitch => {
                self.set_user_additional_block(!self.user_additional_block);
                Ok(())
            }
        }
    }

    /// Toggles one shift control and re-cases the letter keys.
    ///
    /// Both shift controls must be part of the current layout.
    ///
    /// # Returns
    ///
    /// `true` if the side is now active
    pub fn toggle_shift(&mut self, side: ShiftSide) -> Result<bool, KeyboardError> {
        for control in [side, side.other()] {
            if !self.layout.contains_key(control.control_name()) {
                return Err(KeyboardError::missing_control(control.control_name()));
            }
        }

        let active = self.shift.toggle(side);
        self.sync_shift_keys();
        Ok(active)
    }

    /// Highlights a key under the pointer.
    pub fn hover_key(&mut self, name: &str) -> Result<(), KeyboardError> {
        self.set_hovered(name, true)
    }

    /// Restores a key the pointer has left.
    pub fn unhover_key(&mut self, name: &str) -> Result<(), KeyboardError> {
        self.set_hovered(name, false)
    }

    fn set_hovered(&mut self, name: &str, hovered: bool) -> Result<(), KeyboardError> {
        let key_color = self.key_color;
        let key = self
            .layout
            .key_mut(name)
            .ok_or_else(|| KeyboardError::unknown_key(name))?;

        key.hovered = hovered;
        key.background = current_background(key, key_color);
        Ok(())
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn rebuild(&mut self) {
        self.shift.release_all();
        self.layout = build_layout(&LayoutParams {
            language: self.language,
            mode: self.mode,
            separate_numeric_block: self.separate_numeric_block,
            key_size: self.key_size,
            user_keys: &self.additional_keys,
            use_user_symbols: self.user_additional_block,
            key_color: self.key_color,
            key_text_color: self.key_text_color,
        });
    }

    /// Mirrors the shift state onto the shift keys and the letter case.
    fn sync_shift_keys(&mut self) {
        let key_color = self.key_color;
        let upper = self.shift.is_upper();

        for key in &mut self.layout.keys {
            match key.role {
                KeyRole::Shift(side) => {
                    key.checked = self.shift.is_active(side);
                    key.background = current_background(key, key_color);
                }
                KeyRole::Character => key.set_upper_case(upper),
                _ => {}
            }
        }
    }

    /// Relabels rendered symbol keys from the active table.
    fn relabel_symbol_keys(&mut self) {
        if self.mode != BlockMode::Additional {
            return;
        }

        let table: Vec<char> = if self.user_additional_block {
            self.additional_keys.as_string().chars().collect()
        } else {
            standard_symbols().chars().collect()
        };
        let user = self.user_additional_block;
        let key_color = self.key_color;

        for key in &mut self.layout.keys {
            if key.name == SYMBOL_SWITCH_KEY {
                key.label = (if user { "←" } else { "→" }).to_string();
                key.checked = user;
                key.background = current_background(key, key_color);
            } else if let Some(symbol) = symbol_key_index(&key.name).and_then(|i| table.get(i)) {
                let text = symbol.to_string();
                key.label = escape_mnemonic(&text);
                key.value = Some(text);
            }
        }
    }
}

/// Background of a key given its hover/checked state.
fn current_background(key: &KeyDescriptor, key_color: Rgba) -> Rgba {
    if key.hovered || key.checked {
        key_color.lit()
    } else {
        key_color
    }
}

// ============================================================================
// Tests
// ============================================================================
