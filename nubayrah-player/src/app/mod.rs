use std::sync::Arc;

use iced::{Settings, Size, Theme};

use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Nubayrah client with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Nubayrah")
    .theme(app_theme)
    .window_size(Size::new(1100.0, 720.0))
    .run()
}

fn default_settings() -> Settings {
    Settings {
        id: Some("nubayrah-player".to_string()),
        antialiasing: true,
        ..Settings::default()
    }
}

fn app_theme(_: &State) -> Theme {
    Theme::Dark
}
