//! ORCID person lookup endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use curalink_common::ApiError;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct OrcidQuery {
    pub orcid: String,
}

/// GET /api/orcid/person?orcid=
///
/// Identifier format is checked before any network call; a malformed iD is
/// a validation failure, not an upstream one.
pub async fn orcid_person(
    State(state): State<SharedState>,
    Query(params): Query<OrcidQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let person = state.orcid.person(params.orcid.trim()).await?;
    Ok(Json(person))
}
