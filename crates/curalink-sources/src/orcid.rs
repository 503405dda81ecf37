//! ORCID public API client.
//!
//! Endpoint: https://pub.orcid.org/v3.0/{orcid}/person
//!
//! The identifier is validated before any network call: four groups of four
//! characters separated by hyphens, where the final character may be a digit
//! or uppercase X (the ISO 7064 checksum position). The upstream wraps most
//! scalar fields in "value"/"content" objects; normalization flattens those
//! into plain optional strings and sequences.

use std::sync::OnceLock;
use std::time::Duration;

use curalink_common::{ApiError, UpstreamClient};
use regex::Regex;
use serde_json::Value;
use tracing::instrument;

use crate::models::{PersonProfile, SourceKind};

const ORCID_API_BASE: &str = "https://pub.orcid.org/v3.0";

const TIMEOUT: Duration = Duration::from_secs(10);

fn orcid_format() -> &'static Regex {
    static ORCID_FORMAT: OnceLock<Regex> = OnceLock::new();
    ORCID_FORMAT.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$").expect("ORCID pattern is valid")
    })
}

/// Reject malformed identifiers before any network attempt.
pub fn validate_orcid(orcid: &str) -> Result<(), ApiError> {
    if orcid_format().is_match(orcid) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "malformed ORCID iD: {:?} (expected dddd-dddd-dddd-dddX)",
            orcid
        )))
    }
}

#[derive(Debug, Clone)]
pub struct OrcidClient {
    client: UpstreamClient,
}

impl OrcidClient {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// Look up the person record for a validated ORCID iD.
    #[instrument(skip(self))]
    pub async fn person(&self, orcid: &str) -> Result<PersonProfile, ApiError> {
        validate_orcid(orcid)?;

        let url = format!("{}/{}/person", ORCID_API_BASE, orcid);
        let data = self
            .client
            .get_json(SourceKind::Orcid.as_str(), &url, &[], TIMEOUT)
            .await?;

        Ok(person_from_json(orcid, &data))
    }
}

/// Flatten the nested "value"/"content" wrappers of an ORCID person record.
/// Absent nested objects yield `None` / empty sequences, never an error.
pub(crate) fn person_from_json(orcid: &str, data: &Value) -> PersonProfile {
    let name = &data["name"];

    PersonProfile {
        orcid: orcid.to_string(),
        given_names: name["given-names"]["value"].as_str().map(String::from),
        family_name: name["family-name"]["value"].as_str().map(String::from),
        other_names: content_list(&data["other-names"]["other-name"]),
        keywords: content_list(&data["keywords"]["keyword"]),
    }
}

fn content_list(field: &Value) -> Vec<String> {
    field
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|entry| entry["content"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
