//! ClinicalTrials.gov Study Fields API client.
//!
//! Endpoint: https://clinicaltrials.gov/api/query/study_fields
//!
//! The Study Fields API takes a free-text expression, a fixed field
//! projection and a 1-based inclusive rank window in place of offset/limit
//! pagination. Every projected field comes back as a list, usually with a
//! single element; `first_str` is the one place that convention is
//! unwrapped, so an upstream API version change stays a localized edit.

use std::time::Duration;

use curalink_common::{ApiError, UpstreamClient};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::models::{SourceKind, Trial};

const STUDY_FIELDS_URL: &str = "https://clinicaltrials.gov/api/query/study_fields";
const STUDY_URL_BASE: &str = "https://clinicaltrials.gov/study";

const FIELD_PROJECTION: &str =
    "NCTId,Condition,BriefTitle,LocationCountry,LocationCity,OverallStatus,StartDate,Phase";

const TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug, Clone)]
pub struct ClinicalTrialsClient {
    client: UpstreamClient,
}

impl ClinicalTrialsClient {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// Search by expression within the 1-based inclusive rank window,
    /// returning trials in upstream order.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        expr: &str,
        min_rank: usize,
        max_rank: usize,
    ) -> Result<Vec<Trial>, ApiError> {
        let params = [
            ("expr", expr.to_string()),
            ("fields", FIELD_PROJECTION.to_string()),
            ("min_rnk", min_rank.to_string()),
            ("max_rnk", max_rank.to_string()),
            ("fmt", "json".to_string()),
        ];

        let resp = self
            .client
            .get_json(SourceKind::ClinicalTrials.as_str(), STUDY_FIELDS_URL, &params, TIMEOUT)
            .await?;

        let studies = resp["StudyFieldsResponse"]["StudyFields"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        debug!(n = studies.len(), "ClinicalTrials.gov studies retrieved");
        Ok(studies.iter().map(study_to_trial).collect())
    }
}

/// Unwrap the Study Fields list-of-one convention: first element, or absent
/// when the list is empty.
fn first_str(field: &Value) -> Option<String> {
    field.as_array()?.first()?.as_str().map(String::from)
}

fn str_list(field: &Value) -> Vec<String> {
    field
        .as_array()
        .map(|arr| arr.iter().filter_map(|v| v.as_str().map(String::from)).collect())
        .unwrap_or_default()
}

/// Zip city and country lists pairwise. Countries outnumbering cities keep
/// an entry with the city part absent; a fully empty join falls back to the
/// raw country list.
pub(crate) fn reconcile_locations(cities: &[String], countries: &[String]) -> Vec<String> {
    let joined: Vec<String> = countries
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let city = cities.get(i).map(String::as_str).unwrap_or("");
            [city, country.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    if joined.is_empty() {
        countries.to_vec()
    } else {
        joined
    }
}

pub(crate) fn study_to_trial(study: &Value) -> Trial {
    let nct_id = first_str(&study["NCTId"]);
    let cities = str_list(&study["LocationCity"]);
    let countries = str_list(&study["LocationCountry"]);

    let url = nct_id
        .as_ref()
        .map(|id| format!("{}/{}", STUDY_URL_BASE, id));

    Trial {
        title: first_str(&study["BriefTitle"]).unwrap_or_default(),
        status: first_str(&study["OverallStatus"]),
        conditions: str_list(&study["Condition"]),
        locations: reconcile_locations(&cities, &countries),
        nct_id,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_padding_when_countries_outnumber_cities() {
        let cities = vec!["Boston".to_string()];
        let countries = vec!["US".to_string(), "UK".to_string()];
        assert_eq!(
            reconcile_locations(&cities, &countries),
            vec!["Boston, US".to_string(), "UK".to_string()]
        );
    }

    #[test]
    fn test_no_countries_yields_no_locations() {
        assert!(reconcile_locations(&["Paris".to_string()], &[]).is_empty());
    }

    #[test]
    fn test_extra_cities_are_dropped() {
        let cities = vec!["Boston".to_string(), "Paris".to_string()];
        let countries = vec!["US".to_string()];
        assert_eq!(reconcile_locations(&cities, &countries), vec!["Boston, US".to_string()]);
    }

    #[test]
    fn test_study_to_trial_unwraps_single_element_lists() {
        let study = json!({
            "NCTId": ["NCT04956640"],
            "BriefTitle": ["A KRAS G12C Study"],
            "OverallStatus": ["Recruiting"],
            "Condition": ["Pancreatic Cancer", "NSCLC"],
            "LocationCity": ["Boston"],
            "LocationCountry": ["United States", "United Kingdom"],
            "StartDate": ["January 2022"],
            "Phase": ["Phase 2"]
        });

        let trial = study_to_trial(&study);
        assert_eq!(trial.nct_id.as_deref(), Some("NCT04956640"));
        assert_eq!(trial.title, "A KRAS G12C Study");
        assert_eq!(trial.status.as_deref(), Some("Recruiting"));
        assert_eq!(trial.conditions.len(), 2);
        assert_eq!(
            trial.locations,
            vec!["Boston, United States".to_string(), "United Kingdom".to_string()]
        );
        assert_eq!(
            trial.url.as_deref(),
            Some("https://clinicaltrials.gov/study/NCT04956640")
        );
    }

    #[test]
    fn test_study_without_nct_id_has_no_url() {
        let study = json!({
            "NCTId": [],
            "BriefTitle": ["Unregistered"],
            "LocationCountry": ["Germany"]
        });
        let trial = study_to_trial(&study);
        assert_eq!(trial.nct_id, None);
        assert_eq!(trial.url, None);
        assert_eq!(trial.status, None);
        assert_eq!(trial.locations, vec!["Germany".to_string()]);
    }
}
