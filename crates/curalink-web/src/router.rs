//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    favorites::{add_favorite, list_favorites},
    forum::{create_question, create_reply, list_questions},
    health::{root, store_status},
    orcid::orcid_person,
    profiles::{create_patient, create_researcher},
    pubmed::pubmed_search,
    researchgate::researchgate_publications,
    trials::clinical_trials_search,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Diagnostics
        .route("/", get(root))
        .route("/test", get(store_status))
        // Onboarding persistence
        .route("/api/patient", post(create_patient))
        .route("/api/researcher", post(create_researcher))
        // Forums
        .route("/api/forums/questions", post(create_question).get(list_questions))
        .route("/api/forums/replies", post(create_reply))
        // Favorites
        .route("/api/favorites", post(add_favorite).get(list_favorites))
        // External aggregation
        .route("/api/pubmed/search", get(pubmed_search))
        .route("/api/clinical-trials/search", get(clinical_trials_search))
        .route("/api/orcid/person", get(orcid_person))
        .route("/api/researchgate/publications", post(researchgate_publications))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
