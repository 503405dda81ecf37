//! curalink-sources — External biomedical API clients.
//!
//! One module per upstream, each normalizing that source's raw response
//! into the internal record shapes in [`models`]:
//! - PubMed E-utilities (two-phase search + summary)
//! - ClinicalTrials.gov Study Fields API
//! - ORCID public API
//! - ResearchGate (mock — no public API exists)

pub mod clinicaltrials;
pub mod models;
pub mod orcid;
pub mod pubmed;
pub mod researchgate;

pub use clinicaltrials::ClinicalTrialsClient;
pub use models::{PersonProfile, Publication, SourceKind, Trial};
pub use orcid::OrcidClient;
pub use pubmed::PubMedClient;
pub use researchgate::ResearchGateClient;
