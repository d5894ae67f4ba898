pub mod health;
pub mod help;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{websocket, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ws", get(websocket::handle_websocket))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/help", get(help::get_help))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        config::{Config, GameConfig, ServerConfig},
        dictionary::Dictionary,
        vocabulary::WordList,
    };

    fn app() -> Router {
        let state = Arc::new(AppState {
            config: Config {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 0,
                },
                game: GameConfig {
                    word_list_path: String::new(),
                    dictionary_path: String::new(),
                    language: "en".to_string(),
                },
            },
            word_source: Arc::new(WordList::from_words(["silkworm"])),
            dictionary: Arc::new(Dictionary::empty("en")),
        });
        create_routes().with_state(state)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "word-scramble");
    }

    #[tokio::test]
    async fn test_help_route() {
        let (status, body) = get_json("/api/help").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "How to play:");
    }
}
