//! curalink-common — Shared error types and the upstream HTTP client
//! boundary used across all CuraLink crates.

pub mod error;
pub mod upstream;

pub use error::{ApiError, UpstreamKind};
pub use upstream::UpstreamClient;
