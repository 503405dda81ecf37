//! Onboarding persistence — patient and researcher profiles.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use curalink_common::ApiError;
use curalink_store::{Patient, Researcher, COLLECTION_PATIENT, COLLECTION_RESEARCHER};

use crate::handlers::Created;
use crate::state::SharedState;

/// POST /api/patient
pub async fn create_patient(
    State(state): State<SharedState>,
    Json(payload): Json<Patient>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = serde_json::to_value(&payload).map_err(|e| ApiError::Store(e.to_string()))?;
    let id = state.store.insert(COLLECTION_PATIENT, doc).await?;
    Ok(Json(Created { id }))
}

/// POST /api/researcher
pub async fn create_researcher(
    State(state): State<SharedState>,
    Json(payload): Json<Researcher>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = serde_json::to_value(&payload).map_err(|e| ApiError::Store(e.to_string()))?;
    let id = state.store.insert(COLLECTION_RESEARCHER, doc).await?;
    Ok(Json(Created { id }))
}
