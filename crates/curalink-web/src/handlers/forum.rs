//! Forum questions and replies, with role-gated writes.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use curalink_common::ApiError;
use curalink_store::{
    Filter, ForumQuestion, ForumReply, COLLECTION_FORUM_QUESTION, COLLECTION_FORUM_REPLY,
};

use crate::handlers::{Created, Items};
use crate::state::SharedState;

const DEFAULT_QUESTION_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 500;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionFilter {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

/// POST /api/forums/questions — patients only.
pub async fn create_question(
    State(state): State<SharedState>,
    Json(payload): Json<ForumQuestion>,
) -> Result<impl IntoResponse, ApiError> {
    payload.authorize()?;
    let doc = serde_json::to_value(&payload).map_err(|e| ApiError::Store(e.to_string()))?;
    let id = state.store.insert(COLLECTION_FORUM_QUESTION, doc).await?;
    Ok(Json(Created { id }))
}

/// GET /api/forums/questions?tag=&category=&limit=
pub async fn list_questions(
    State(state): State<SharedState>,
    Query(params): Query<QuestionFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_QUESTION_LIMIT).min(MAX_LIST_LIMIT);

    let mut filter = Filter::new();
    if let Some(tag) = params.tag.filter(|t| !t.is_empty()) {
        filter = filter.contains("tags", tag);
    }
    if let Some(category) = params.category.filter(|c| !c.is_empty()) {
        filter = filter.eq("category", category);
    }

    let items: Vec<Value> = state
        .store
        .find(COLLECTION_FORUM_QUESTION, &filter, limit)
        .await?;
    Ok(Json(Items { items }))
}

/// POST /api/forums/replies — researchers only.
pub async fn create_reply(
    State(state): State<SharedState>,
    Json(payload): Json<ForumReply>,
) -> Result<impl IntoResponse, ApiError> {
    payload.authorize()?;
    let doc = serde_json::to_value(&payload).map_err(|e| ApiError::Store(e.to_string()))?;
    let id = state.store.insert(COLLECTION_FORUM_REPLY, doc).await?;
    Ok(Json(Created { id }))
}
