//! curalink-web — HTTP surface for the CuraLink backend.
//! Exposes:
//!   - Onboarding persistence (patient / researcher profiles)
//!   - Forums (role-gated questions and replies)
//!   - Favorites
//!   - External aggregation (PubMed, ClinicalTrials.gov, ORCID, mock ResearchGate)

pub mod handlers;
pub mod router;
pub mod state;
