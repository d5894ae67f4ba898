use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Root words, one per line
    pub word_list_path: String,
    /// Accepted words, one per line
    pub dictionary_path: String,
    /// Language tag passed to the dictionary check
    pub language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "./data/start.txt".to_string()),
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./data/dictionary.txt".to_string()),
            language: env::var("GAME_LANGUAGE")
                .map(|lang| lang.trim().to_lowercase())
                .ok()
                .filter(|lang| !lang.is_empty())
                .unwrap_or_else(|| "en".to_string()),
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
