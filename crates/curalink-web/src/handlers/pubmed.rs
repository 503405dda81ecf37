//! PubMed search endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use curalink_common::ApiError;

use crate::handlers::Items;
use crate::state::SharedState;

const DEFAULT_MAX_RESULTS: usize = 20;
const MAX_RESULTS_CAP: usize = 100;
const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Deserialize)]
pub struct PubMedQuery {
    pub query: String,
    pub max_results: Option<usize>,
}

/// GET /api/pubmed/search?query=&max_results=
pub async fn pubmed_search(
    State(state): State<SharedState>,
    Query(params): Query<PubMedQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let term = params.query.trim();
    if term.len() < MIN_QUERY_LEN {
        return Err(ApiError::Validation(format!(
            "query must be at least {} characters",
            MIN_QUERY_LEN
        )));
    }

    let max = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS).min(MAX_RESULTS_CAP);
    let items = state.pubmed.search(term, max).await?;
    Ok(Json(Items { items }))
}
