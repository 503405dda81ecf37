//! PubMed E-utilities client.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi
//!
//! Two-phase protocol: esearch returns an ordered PMID list, esummary then
//! batch-fetches summaries for that exact set in one call. An empty phase-1
//! result short-circuits without issuing phase 2.

use std::time::Duration;

use curalink_common::{ApiError, UpstreamClient};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::models::{Publication, SourceKind};

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";
const ARTICLE_URL_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov";

const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: UpstreamClient,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(client: UpstreamClient, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("db", "pubmed".to_string()), ("retmode", "json".to_string())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Phase 1: search PubMed and return the ordered PMID list.
    #[instrument(skip(self))]
    async fn esearch(&self, term: &str, max: usize) -> Result<Vec<String>, ApiError> {
        let mut params = self.base_params();
        params.push(("term", term.to_string()));
        params.push(("retmax", max.to_string()));

        let resp = self
            .client
            .get_json(SourceKind::PubMed.as_str(), ESEARCH_URL, &params, TIMEOUT)
            .await?;

        let ids: Vec<String> = resp["esearchresult"]["idlist"]
            .as_array()
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();

        debug!(?ids, "PubMed esearch returned PMIDs");
        Ok(ids)
    }

    /// Phase 2: batch-fetch summaries for the exact PMID set.
    #[instrument(skip(self, pmids))]
    async fn esummary(&self, pmids: &[String]) -> Result<Value, ApiError> {
        let mut params = self.base_params();
        params.push(("id", pmids.join(",")));

        let resp = self
            .client
            .get_json(SourceKind::PubMed.as_str(), ESUMMARY_URL, &params, TIMEOUT)
            .await?;

        Ok(resp["result"].clone())
    }

    /// Search by free-text term, bounded by `max_results`, returning
    /// publications in phase-1 PMID order.
    pub async fn search(&self, term: &str, max_results: usize) -> Result<Vec<Publication>, ApiError> {
        let pmids = self.esearch(term, max_results).await?;
        if pmids.is_empty() {
            return Ok(Vec::new());
        }
        let summaries = self.esummary(&pmids).await?;
        Ok(summaries_to_publications(&pmids, &summaries))
    }
}

/// Extract a four-digit year from a PubMed `pubdate` string such as
/// "2022 Jan" or "2022 Nov-Dec". Anything without a well-formed numeric
/// four-character prefix yields `None`.
pub(crate) fn parse_year(pubdate: &str) -> Option<i32> {
    let prefix = pubdate.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

/// Map the esummary `result` object back onto the phase-1 PMID order.
/// PMIDs absent from the summary map are skipped, not errors.
pub(crate) fn summaries_to_publications(pmids: &[String], result: &Value) -> Vec<Publication> {
    pmids
        .iter()
        .filter_map(|pmid| {
            let summary = result.get(pmid)?;
            if !summary.is_object() {
                return None;
            }
            Some(Publication {
                source_id: pmid.clone(),
                title: summary["title"].as_str().unwrap_or("").to_string(),
                journal: summary["fulljournalname"].as_str().map(String::from),
                year: summary["pubdate"].as_str().and_then(parse_year),
                url: Some(format!("{}/{}/", ARTICLE_URL_BASE, pmid)),
                keywords: Vec::new(),
            })
        })
        .collect()
}
