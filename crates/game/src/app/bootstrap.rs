use engine::LoopConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::flappy::FlappyGame;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) game: FlappyGame,
}

pub(crate) fn build_app() -> AppWiring {
    init_tracing();
    info!("=== Flappy Startup ===");

    let config = LoopConfig {
        window_title: "Flappy Bird".to_string(),
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        game: FlappyGame::new(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
