// SPDX-License-Identifier: GPL-3.0-only

//! Demo application hosting the virtual keyboard.
//!
//! Two read-only text fields are subscribed to the keyboard; everything typed
//! on the keyboard lands in both. Keyboard events are listed underneath.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app_settings::{self, TEXT_AREA_HEIGHT};
use crate::config::Config;
use crate::error::KeyboardError;
use crate::fl;
use crate::keyboard::{KeyboardEvent, SharedTarget, TextBuffer, TextTarget, VirtualKeyboard};
use crate::renderer::{RendererMessage, apply_message, render_keyboard};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, container};

/// Number of event log lines shown below the keyboard.
const EVENT_LOG_LINES: usize = 5;

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    keyboard: VirtualKeyboard,
    /// Subscribed text fields. The keyboard only holds weak references.
    fields: Vec<Rc<RefCell<TextBuffer>>>,
    /// Formatted keyboard events, oldest first.
    event_log: Rc<RefCell<Vec<String>>>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction with the keyboard.
    Keyboard(RendererMessage),
    /// Configuration has been updated.
    UpdateConfig(Config),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let config = load_config();

        let keyboard = config.build_keyboard().unwrap_or_else(|e| {
            tracing::warn!("Invalid keyboard settings, using defaults: {}", e);
            VirtualKeyboard::new()
        });

        let mut app = AppModel {
            core,
            config,
            keyboard,
            fields: vec![
                TextBuffer::new(fl!("first-field")).shared(),
                TextBuffer::new(fl!("second-field")).shared(),
            ],
            event_log: Rc::new(RefCell::new(Vec::new())),
        };
        app.connect_keyboard();

        (app, Task::none())
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let mut content = widget::column::column().spacing(8.0);

        for field in &self.fields {
            let field = field.borrow();
            content = content.push(widget::text::body(field.name().to_string())).push(
                container(widget::text::body(field.text().to_string()))
                    .width(Length::Fill)
                    .height(Length::Fixed(TEXT_AREA_HEIGHT / 2.0))
                    .padding(4.0)
                    .class(cosmic::style::Container::Card),
            );
        }

        content = content.push(render_keyboard(&self.keyboard).map(Message::Keyboard));

        content = content.push(widget::text::body(fl!("event-log")));
        for line in recent_events(&self.event_log.borrow(), EVENT_LOG_LINES) {
            content = content.push(widget::text::body(line.clone()));
        }

        container(content)
            .padding(8.0)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::Keyboard(message) => {
                apply_message(&mut self.keyboard, message);
            }
            Message::UpdateConfig(config) => {
                match reconfigure(&mut self.keyboard, &self.config, &config) {
                    Ok(true) => tracing::info!("Applied configuration update"),
                    Ok(false) => tracing::debug!("Configuration unchanged"),
                    Err(e) => {
                        tracing::warn!("Ignoring configuration update: {}", e);
                        self.event_log
                            .borrow_mut()
                            .push(fl!("config-error", error = e.to_string()));
                    }
                }
                self.config = config;
            }
        }

        Task::none()
    }
}

impl AppModel {
    /// Subscribes the text fields and the event log to the keyboard.
    fn connect_keyboard(&mut self) {
        let targets: Vec<SharedTarget> = self
            .fields
            .iter()
            .map(|field| -> SharedTarget { field.clone() })
            .collect();
        self.keyboard.set_subscribers(&targets);

        let log = Rc::clone(&self.event_log);
        self.keyboard.on_event(move |event| {
            tracing::info!("{:?}", event);
            log.borrow_mut().push(describe_event(event));
        });
    }
}

/// Applies `update` to the keyboard unless it equals `current`.
///
/// Returns whether the keyboard was reconfigured.
fn reconfigure(
    keyboard: &mut VirtualKeyboard,
    current: &Config,
    update: &Config,
) -> Result<bool, KeyboardError> {
    if update == current {
        return Ok(false);
    }
    update.apply(keyboard)?;
    Ok(true)
}

/// Loads the persisted configuration, falling back to defaults.
fn load_config() -> Config {
    cosmic_config::Config::new(app_settings::APP_ID, Config::VERSION)
        .map(|context| match Config::get_entry(&context) {
            Ok(config) => config,
            Err((errors, config)) => {
                for why in errors {
                    tracing::warn!("Error loading configuration entry: {}", why);
                }
                config
            }
        })
        .unwrap_or_default()
}

/// Localized one-line description of a keyboard event.
fn describe_event(event: &KeyboardEvent) -> String {
    match event {
        KeyboardEvent::TextAdded(text) => fl!("text-added", text = visible_text(text)),
        KeyboardEvent::TextUndone(text) => fl!("text-undone", text = visible_text(text)),
        KeyboardEvent::LayoutChanged(language) => {
            fl!("layout-changed", language = language.indicator())
        }
    }
}

/// Makes whitespace-only text visible in the log.
fn visible_text(text: &str) -> String {
    match text {
        " " => "␣".to_string(),
        "\n" => "⏎".to_string(),
        other => other.to_string(),
    }
}

/// The last `count` entries of the log.
fn recent_events(log: &[String], count: usize) -> &[String] {
    &log[log.len().saturating_sub(count)..]
}
