//! Smoke tests against the real upstream APIs.
//!
//! Run with: cargo test -p curalink-sources --test test_live_sources -- --ignored --nocapture

use curalink_common::UpstreamClient;
use curalink_sources::{ClinicalTrialsClient, OrcidClient, PubMedClient};

#[tokio::test]
#[ignore] // Requires network access
async fn test_pubmed_search_live() {
    let client = PubMedClient::new(UpstreamClient::new().unwrap(), None);

    let pubs = client
        .search("KRAS pancreatic cancer", 5)
        .await
        .expect("PubMed search failed");

    println!("Found {} publications", pubs.len());
    for p in &pubs {
        println!("{} ({:?}) — {}", p.source_id, p.year, p.title);
    }

    assert!(!pubs.is_empty(), "should find at least one publication");
    assert!(pubs.iter().all(|p| !p.source_id.is_empty()));
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_clinical_trials_search_live() {
    let client = ClinicalTrialsClient::new(UpstreamClient::new().unwrap());

    let trials = client
        .search("pancreatic cancer", 1, 5)
        .await
        .expect("ClinicalTrials.gov search failed");

    println!("Found {} trials", trials.len());
    for t in &trials {
        println!("{:?} — {} [{:?}]", t.nct_id, t.title, t.status);
    }

    assert!(!trials.is_empty(), "should find at least one trial");
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_orcid_person_live() {
    let client = OrcidClient::new(UpstreamClient::new().unwrap());

    // Josiah Carberry, ORCID's long-standing demo record
    let person = client
        .person("0000-0002-1825-0097")
        .await
        .expect("ORCID lookup failed");

    println!("{:?} {:?}", person.given_names, person.family_name);
    assert_eq!(person.orcid, "0000-0002-1825-0097");
}
