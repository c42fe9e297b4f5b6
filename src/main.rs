use std::sync::Mutex;

use combo_input::app::{self, State};
use combo_input::config::{self, Config};
use tracing_subscriber::EnvFilter;

static BOOT_CONFIG: Mutex<Option<Config>> = Mutex::new(None);

fn boot() -> (State, iced::Task<app::Message>) {
    let config = BOOT_CONFIG
        .lock()
        .ok()
        .and_then(|mut config| config.take())
        .unwrap_or_else(config::load);
    State::new(config)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();

    tracing::info!("Starting combo input demo");

    if let Ok(mut slot) = BOOT_CONFIG.lock() {
        *slot = Some(config);
    }

    iced::application(boot, State::update, State::view)
        .title(State::title)
        .subscription(State::subscription)
        .theme(State::theme)
        .window_size(iced::Size::new(480.0, 360.0))
        .run()
}
