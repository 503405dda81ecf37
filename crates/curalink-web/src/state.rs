//! Shared application state for the web server.
//!
//! The store handle is owned by the process entry point and injected here,
//! never reached through ambient globals, so tests can swap in a
//! `MemoryStore` without touching the handlers.

use std::sync::Arc;

use curalink_common::{ApiError, UpstreamClient};
use curalink_sources::{ClinicalTrialsClient, OrcidClient, PubMedClient, ResearchGateClient};
use curalink_store::DocumentStore;

/// State injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub pubmed: PubMedClient,
    pub trials: ClinicalTrialsClient,
    pub orcid: OrcidClient,
    pub researchgate: ResearchGateClient,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        pubmed_api_key: Option<String>,
    ) -> Result<Self, ApiError> {
        let client = UpstreamClient::new()?;
        Ok(Self {
            store,
            pubmed: PubMedClient::new(client.clone(), pubmed_api_key),
            trials: ClinicalTrialsClient::new(client.clone()),
            orcid: OrcidClient::new(client),
            researchgate: ResearchGateClient::new(),
        })
    }
}

pub type SharedState = Arc<AppState>;
