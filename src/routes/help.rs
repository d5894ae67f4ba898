use axum::Json;

use crate::game::{GameEngine, Notice};

/// How-to-play text shown by the help button
pub async fn get_help() -> Json<Notice> {
    Json(GameEngine::help())
}
