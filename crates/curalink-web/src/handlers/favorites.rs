//! Saved favorites — opaque items tagged by type.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use curalink_common::ApiError;
use curalink_store::{Favorite, Filter, COLLECTION_FAVORITE};

use crate::handlers::{Created, Items};
use crate::state::SharedState;

const DEFAULT_FAVORITE_LIMIT: usize = 100;
const MAX_LIST_LIMIT: usize = 500;

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteFilter {
    pub user_id: Option<String>,
    pub user_role: Option<String>,
    pub limit: Option<usize>,
}

/// POST /api/favorites
pub async fn add_favorite(
    State(state): State<SharedState>,
    Json(payload): Json<Favorite>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = serde_json::to_value(&payload).map_err(|e| ApiError::Store(e.to_string()))?;
    let id = state.store.insert(COLLECTION_FAVORITE, doc).await?;
    Ok(Json(Created { id }))
}

/// GET /api/favorites?user_id=&user_role=&limit=
pub async fn list_favorites(
    State(state): State<SharedState>,
    Query(params): Query<FavoriteFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_FAVORITE_LIMIT).min(MAX_LIST_LIMIT);

    let mut filter = Filter::new();
    if let Some(user_id) = params.user_id.filter(|u| !u.is_empty()) {
        filter = filter.eq("user_id", user_id);
    }
    if let Some(user_role) = params.user_role.filter(|r| !r.is_empty()) {
        filter = filter.eq("user_role", user_role);
    }

    let items: Vec<Value> = state.store.find(COLLECTION_FAVORITE, &filter, limit).await?;
    Ok(Json(Items { items }))
}
