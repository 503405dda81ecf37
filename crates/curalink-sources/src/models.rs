//! Normalized record shapes for aggregated upstream data.

use serde::{Deserialize, Serialize};

/// The upstreams this system aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    PubMed,
    ClinicalTrials,
    Orcid,
    ResearchGate,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::PubMed         => "pubmed",
            SourceKind::ClinicalTrials => "clinicaltrials",
            SourceKind::Orcid          => "orcid",
            SourceKind::ResearchGate   => "researchgate",
        }
    }
}

/// A publication normalized from any literature source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// External identifier, unique per source (e.g. a PMID).
    pub source_id: String,
    pub title: String,
    pub journal: Option<String>,
    /// Four-digit year, present only when the upstream date string starts
    /// with a well-formed numeric year.
    pub year: Option<i32>,
    pub url: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A clinical trial normalized from ClinicalTrials.gov.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Absent when the upstream omits it; `url` is then absent too.
    pub nct_id: Option<String>,
    pub title: String,
    pub status: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    /// "city, country" entries; a country with no matching city appears on
    /// its own.
    #[serde(default)]
    pub locations: Vec<String>,
    pub url: Option<String>,
}

/// Person record normalized from an ORCID lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub orcid: String,
    pub given_names: Option<String>,
    pub family_name: Option<String>,
    #[serde(default)]
    pub other_names: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_names() {
        assert_eq!(SourceKind::PubMed.as_str(), "pubmed");
        assert_eq!(SourceKind::ClinicalTrials.as_str(), "clinicaltrials");
        assert_eq!(SourceKind::Orcid.as_str(), "orcid");
        assert_eq!(SourceKind::ResearchGate.as_str(), "researchgate");
    }

    #[test]
    fn test_publication_serializes_absent_year_as_null() {
        let p = Publication {
            source_id: "123".into(),
            title: "t".into(),
            journal: None,
            year: None,
            url: None,
            keywords: vec![],
        };
        let v = serde_json::to_value(&p).unwrap();
        assert!(v["year"].is_null());
        assert!(v["keywords"].as_array().unwrap().is_empty());
    }
}
