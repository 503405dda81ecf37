//! Allowlist-capped HTTP client for upstream APIs.
//!
//! All outbound traffic goes through this wrapper: only approved hosts are
//! reachable, every call carries an explicit timeout, and any failure is
//! mapped to a single `ApiError::Upstream` carrying the upstream name.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

use crate::error::{ApiError, UpstreamKind};

/// Fallback timeout when a caller does not supply its own bound.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP client that only allows requests to approved upstream hosts.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl UpstreamClient {
    /// Creates a client with the default allowlist of CuraLink upstreams.
    pub fn new() -> Result<Self, ApiError> {
        let mut allowlist = HashSet::new();
        let domains = [
            "eutils.ncbi.nlm.nih.gov", // PubMed E-utilities
            "clinicaltrials.gov",      // ClinicalTrials.gov
            "pub.orcid.org",           // ORCID public API
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates whether a URL is permitted under the current allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// GET a JSON body from an allowlisted upstream.
    ///
    /// `source` names the upstream for error reporting. The `timeout` bounds
    /// this single call; there are no retries.
    pub async fn get_json(
        &self,
        source: &str,
        url: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<serde_json::Value, ApiError> {
        if !self.is_allowed(url) {
            return Err(ApiError::upstream(
                source,
                UpstreamKind::Transport,
                format!("host not in allowlist for URL {}", url),
            ));
        }

        debug!(source, url, "upstream GET");

        let resp = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_reqwest_error(source, e))?
            .error_for_status()
            .map_err(|e| map_reqwest_error(source, e))?;

        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| map_reqwest_error(source, e))
    }
}

fn map_reqwest_error(source: &str, err: reqwest::Error) -> ApiError {
    let kind = if err.is_timeout() {
        UpstreamKind::Timeout
    } else if let Some(status) = err.status() {
        UpstreamKind::Status(status.as_u16())
    } else {
        UpstreamKind::Transport
    };
    ApiError::upstream(source, kind, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowlist_accepts_known_hosts() {
        let client = UpstreamClient::new().unwrap();
        assert!(client.is_allowed("https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"));
        assert!(client.is_allowed("https://clinicaltrials.gov/api/query/study_fields"));
        assert!(client.is_allowed("https://pub.orcid.org/v3.0/0000-0002-1825-0097/person"));
    }

    #[test]
    fn test_allowlist_rejects_unknown_hosts() {
        let client = UpstreamClient::new().unwrap();
        assert!(!client.is_allowed("https://example.com/anything"));
        assert!(!client.is_allowed("not a url"));
    }

    #[test]
    fn test_allow_domain_extends_allowlist() {
        let mut client = UpstreamClient::new().unwrap();
        assert!(!client.is_allowed("https://api.example.org/v1"));
        client.allow_domain("api.example.org");
        assert!(client.is_allowed("https://api.example.org/v1"));
    }

    #[tokio::test]
    async fn test_get_json_rejects_disallowed_url_without_network() {
        let client = UpstreamClient::new().unwrap();
        let err = client
            .get_json("mock", "https://example.com/x", &[], Duration::from_secs(1))
            .await
            .unwrap_err();
        match err {
            ApiError::Upstream { source, kind, .. } => {
                assert_eq!(source, "mock");
                assert_eq!(kind, UpstreamKind::Transport);
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }
}
