//! Mock ResearchGate publications endpoint.
//!
//! ResearchGate has no official public API; this endpoint serves the
//! deterministic demo list from `curalink_sources::researchgate`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::handlers::Items;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct PublicationsRequest {
    pub profile_url: Option<String>,
    pub orcid: Option<String>,
}

/// POST /api/researchgate/publications
pub async fn researchgate_publications(
    State(state): State<SharedState>,
    Json(body): Json<PublicationsRequest>,
) -> impl IntoResponse {
    let items = state
        .researchgate
        .publications(body.orcid.as_deref(), body.profile_url.as_deref());
    Json(Items { items })
}
