//! ClinicalTrials.gov search endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use curalink_common::ApiError;

use crate::handlers::Items;
use crate::state::SharedState;

const DEFAULT_MIN_RANK: usize = 1;
const DEFAULT_MAX_RANK: usize = 20;

#[derive(Debug, Deserialize)]
pub struct TrialsQuery {
    pub expr: String,
    pub min_rank: Option<usize>,
    pub max_rank: Option<usize>,
}

/// GET /api/clinical-trials/search?expr=&min_rank=&max_rank=
pub async fn clinical_trials_search(
    State(state): State<SharedState>,
    Query(params): Query<TrialsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let expr = params.expr.trim();
    if expr.is_empty() {
        return Err(ApiError::Validation("expr must not be empty".to_string()));
    }

    let min_rank = params.min_rank.unwrap_or(DEFAULT_MIN_RANK);
    let max_rank = params.max_rank.unwrap_or(DEFAULT_MAX_RANK);
    if min_rank == 0 {
        return Err(ApiError::Validation("min_rank is 1-based".to_string()));
    }
    if max_rank < min_rank {
        return Err(ApiError::Validation(
            "max_rank must not be below min_rank".to_string(),
        ));
    }

    let items = state.trials.search(expr, min_rank, max_rank).await?;
    Ok(Json(Items { items }))
}
