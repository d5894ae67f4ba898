mod config;
mod dictionary;
mod game;
mod routes;
mod utils;
mod vocabulary;
mod websocket;

use std::sync::Arc;

use anyhow::{Context, Result};
use config::Config;
use dictionary::{Dictionary, DictionaryChecker};
use game::GameEngine;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocabulary::{WordList, WordSource};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Root words for new rounds
    pub word_source: Arc<dyn WordSource>,
    pub dictionary: Arc<dyn DictionaryChecker>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Without a vocabulary no round can ever start, so this is fatal
    let word_list = WordList::load(&config.game.word_list_path).await?;
    let word_source: Arc<dyn WordSource> = Arc::new(word_list);
    GameEngine::start_round(word_source.as_ref())
        .context("Could not start a round from the word list")?;

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path, &config.game.language)
        .await
    {
        Ok(dict) => {
            if dict.is_empty() {
                tracing::warn!("Dictionary {} has no words", config.game.dictionary_path);
            }
            tracing::info!("Dictionary loaded successfully ({})", dict.language());
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {:#}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Every submission will be rejected until a word list is placed at {}",
                config.game.dictionary_path
            );
            Dictionary::empty(&config.game.language)
        }
    };

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        word_source,
        dictionary: Arc::new(dictionary),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::create_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
