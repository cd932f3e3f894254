// SPDX-License-Identifier: GPL-3.0-only

//! Virtual keyboard demo
//!
//! Opens a window with two text fields and the on-screen keyboard. The window
//! is sized to fit the keyboard in its configured layout.

use vkeyboard::{app, app_settings, i18n, layout};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vkeyboard=info".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Fit the window to the widest layout (Russian with the numeric row).
    let panel = layout::panel_size(
        layout::Language::Russian,
        true,
        layout::Size::new(app_settings::DEFAULT_KEY_SIZE, app_settings::DEFAULT_KEY_SIZE),
    );
    let width = panel.width as f32 + 16.0;
    let height = panel.height as f32 + app_settings::TEXT_AREA_HEIGHT * 2.0;

    tracing::info!("Starting virtual keyboard demo ({}x{})", width, height);

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(width, height))
        .size_limits(cosmic::iced::Limits::NONE.min_width(width).min_height(height))
        .resizable(Some(app_settings::RESIZE_BORDER));

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, ())
}
