//! Seeker binary: logging setup and the Iced application shell

use iced::{window, Size};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seeker::app::Seeker;
use seeker::config::CONFIG;

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("Starting Seeker (search API at {})", CONFIG.api_base_url);

    iced::application("Seeker", Seeker::update, Seeker::view)
        .theme(Seeker::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            position: window::Position::Centered,
            min_size: Some(Size::new(480.0, 360.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
