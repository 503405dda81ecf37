//! HTTP handlers for all routes.

pub mod favorites;
pub mod forum;
pub mod health;
pub mod orcid;
pub mod profiles;
pub mod pubmed;
pub mod researchgate;
pub mod trials;

use serde::Serialize;

/// Response body for every create endpoint.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
}

/// Response body for every list endpoint.
#[derive(Debug, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}
