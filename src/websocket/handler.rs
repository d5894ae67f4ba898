use crate::{
    game::{GameEngine, Submission},
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler. Every connection plays its own game.
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let mut engine = match GameEngine::new(
        state.word_source.clone(),
        state.dictionary.clone(),
        state.config.game.language.clone(),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Session {}: could not start a round: {}", session_id, e);
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            if let Ok(json) = serde_json::to_string(&error_msg) {
                let _ = sender.send(Message::Text(json.into())).await;
            }
            return;
        }
    };

    tracing::info!(
        "Session {} started with root word '{}' ({})",
        session_id,
        engine.round().root_word(),
        engine.language()
    );

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // The receive task owns the engine, so messages are resolved strictly one at a time
    let mut recv_task = tokio::spawn(async move {
        if tx.send(ServerMessage::round_state(engine.round())).await.is_err() {
            return;
        }

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                    Ok(client_msg) => {
                        if let Err(e) =
                            handle_client_message(client_msg, &mut engine, &tx, session_id).await
                        {
                            tracing::error!(
                                "Session {}: error handling message: {}",
                                session_id,
                                e
                            );
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Session {}: client disconnected", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    tracing::info!("Session {} closed", session_id);
}

/// Handle individual client messages
async fn handle_client_message(
    msg: ClientMessage,
    engine: &mut GameEngine,
    tx: &mpsc::Sender<ServerMessage>,
    session_id: Uuid,
) -> anyhow::Result<()> {
    match msg {
        ClientMessage::GetState => {
            tx.send(ServerMessage::round_state(engine.round())).await?;
        }
        ClientMessage::Refresh => {
            let round = engine.refresh()?;
            tracing::info!(
                "Session {} refreshed, new root word '{}'",
                session_id,
                round.root_word()
            );
            tx.send(ServerMessage::round_state(round)).await?;
        }
        ClientMessage::SubmitWord { word } => match engine.submit(&word) {
            Ok(Submission::Ignored) => {}
            Ok(Submission::Accepted { word, points, score }) => {
                tracing::info!(
                    "Session {} accepted '{}' (+{}, score {})",
                    session_id,
                    word,
                    points,
                    score
                );
                let used_words = engine.round().used_words().to_vec();
                tx.send(ServerMessage::WordAccepted {
                    word,
                    points,
                    score,
                    used_words,
                })
                .await?;
            }
            Err(e) => {
                tracing::debug!("Session {} rejected '{}': {}", session_id, word, e.title());
                tx.send(ServerMessage::invalid_word(&e)).await?;
            }
        },
        ClientMessage::Help => {
            tx.send(GameEngine::help().into()).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, GameConfig, ServerConfig},
        dictionary::Dictionary,
        game::RejectionKind,
        vocabulary::WordList,
    };
    use axum::{routing::get, Router};
    use tokio_tungstenite::{connect_async, tungstenite};

    type Client = tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
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
            dictionary: Arc::new(Dictionary::from_words("en", ["silk", "worm", "milk"])),
        })
    }

    async fn connect() -> Client {
        let app = Router::new()
            .route("/ws", get(handle_websocket))
            .with_state(test_state());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let (client, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
        client
    }

    async fn send(client: &mut Client, msg: &str) {
        client
            .send(tungstenite::Message::Text(msg.to_string().into()))
            .await
            .unwrap();
    }

    async fn recv(client: &mut Client) -> ServerMessage {
        loop {
            let msg = client.next().await.unwrap().unwrap();
            if let tungstenite::Message::Text(text) = msg {
                return serde_json::from_str(text.as_str()).unwrap();
            }
        }
    }

    fn round_state(root_word: &str, used_words: &[&str], score: u32) -> ServerMessage {
        ServerMessage::RoundState {
            root_word: root_word.to_string(),
            used_words: used_words.iter().map(|w| w.to_string()).collect(),
            score,
        }
    }

    #[tokio::test]
    async fn test_session_sends_round_on_connect() {
        let mut client = connect().await;
        assert_eq!(recv(&mut client).await, round_state("silkworm", &[], 0));
    }

    #[tokio::test]
    async fn test_session_accepts_and_rejects_words() {
        let mut client = connect().await;
        recv(&mut client).await;

        send(&mut client, r#"{"type":"submit_word","word":"Silk\n"}"#).await;
        assert_eq!(
            recv(&mut client).await,
            ServerMessage::WordAccepted {
                word: "silk".to_string(),
                points: 4,
                score: 4,
                used_words: vec!["silk".to_string()],
            }
        );

        send(&mut client, r#"{"type":"submit_word","word":"silk"}"#).await;
        match recv(&mut client).await {
            ServerMessage::InvalidWord { kind, title, .. } => {
                assert_eq!(kind, RejectionKind::AlreadyUsed);
                assert_eq!(title, "Word used already");
            }
            other => panic!("unexpected message: {:?}", other),
        }

        // Blank input produces no reply, so the next message answers get_state
        send(&mut client, r#"{"type":"submit_word","word":"   "}"#).await;
        send(&mut client, r#"{"type":"get_state"}"#).await;
        assert_eq!(recv(&mut client).await, round_state("silkworm", &["silk"], 4));
    }

    #[tokio::test]
    async fn test_session_refresh_resets_round() {
        let mut client = connect().await;
        recv(&mut client).await;

        send(&mut client, r#"{"type":"submit_word","word":"worm"}"#).await;
        recv(&mut client).await;

        send(&mut client, r#"{"type":"refresh"}"#).await;
        assert_eq!(recv(&mut client).await, round_state("silkworm", &[], 0));
    }

    #[tokio::test]
    async fn test_session_help_and_bad_input() {
        let mut client = connect().await;
        recv(&mut client).await;

        send(&mut client, r#"{"type":"help"}"#).await;
        assert!(matches!(
            recv(&mut client).await,
            ServerMessage::Help { title, .. } if title == "How to play:"
        ));

        send(&mut client, "not json").await;
        assert!(matches!(
            recv(&mut client).await,
            ServerMessage::Error { message } if message.starts_with("Invalid message format")
        ));
    }
}
