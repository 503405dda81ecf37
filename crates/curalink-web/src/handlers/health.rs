//! Liveness and store diagnostics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use curalink_common::error::truncate_msg;

use crate::state::SharedState;

/// Number of collection names reported by `/test`.
const MAX_REPORTED_COLLECTIONS: usize = 10;

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub backend: &'static str,
    pub store: String,
    pub collections: Vec<String>,
}

/// GET / — liveness message.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "CuraLink backend is running" }))
}

/// GET /test — store connectivity report.
pub async fn store_status(State(state): State<SharedState>) -> impl IntoResponse {
    let report = match state.store.collections().await {
        Ok(mut collections) => {
            collections.truncate(MAX_REPORTED_COLLECTIONS);
            StatusReport {
                backend: "running",
                store: "connected".to_string(),
                collections,
            }
        }
        Err(e) => StatusReport {
            backend: "running",
            store: format!("error: {}", truncate_msg(&e.to_string(), 80)),
            collections: Vec::new(),
        },
    };
    Json(report)
}
