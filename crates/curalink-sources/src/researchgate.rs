//! Mock ResearchGate publication source.
//!
//! ResearchGate has no official public API, so this module serves a fixed
//! in-memory publication list rotated deterministically by a caller seed.
//! The output is demo data, not real upstream data. Rotation rule: sum the
//! char code points of the seed, reduce modulo the list length, rotate left
//! by that many positions. Identical seeds always produce identical order.

use crate::models::Publication;

const DEFAULT_SEED: &str = "demo";

fn base_publications() -> Vec<Publication> {
    vec![
        Publication {
            source_id: "rg-demo-1".to_string(),
            title: "Translational Oncology: Bridging Bench to Bedside".to_string(),
            journal: Some("Nature Medicine".to_string()),
            year: Some(2022),
            url: Some("https://www.nature.com/".to_string()),
            keywords: Vec::new(),
        },
        Publication {
            source_id: "rg-demo-2".to_string(),
            title: "Real-world Evidence in Clinical Trials".to_string(),
            journal: Some("The Lancet".to_string()),
            year: Some(2021),
            url: Some("https://www.thelancet.com/".to_string()),
            keywords: Vec::new(),
        },
        Publication {
            source_id: "rg-demo-3".to_string(),
            title: "Machine Learning for Precision Medicine".to_string(),
            journal: Some("Science".to_string()),
            year: Some(2020),
            url: Some("https://www.science.org/".to_string()),
            keywords: Vec::new(),
        },
    ]
}

/// Seed → rotation offset: sum of char code points mod `len`.
pub(crate) fn rotation_offset(seed: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    seed.chars().map(|c| c as usize).sum::<usize>() % len
}

/// Rotate the fixed list left by the seed-derived offset. Elements rotating
/// past the end wrap to the front, preserving relative order.
pub(crate) fn rotate_by_seed(seed: &str) -> Vec<Publication> {
    let mut items = base_publications();
    let offset = rotation_offset(seed, items.len());
    items.rotate_left(offset);
    items
}

#[derive(Debug, Clone, Default)]
pub struct ResearchGateClient;

impl ResearchGateClient {
    pub fn new() -> Self {
        Self
    }

    /// Mock publication list for a profile. Seed preference: orcid, then
    /// profile URL, then a fixed default; surrounding whitespace ignored.
    pub fn publications(&self, orcid: Option<&str>, profile_url: Option<&str>) -> Vec<Publication> {
        let seed = [orcid, profile_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEED);
        rotate_by_seed(seed)
    }
}
