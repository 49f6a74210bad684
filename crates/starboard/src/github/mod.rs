//! GitHub REST access for starred repositories.
//!
//! # Module Structure
//!
//! - [`connection`] - Path-based request issuing against an API endpoint
//! - [`types`] - Upstream payloads and media types
//! - [`parse`] - Listing, readme and license decoders
//! - [`enrich`] - Per-repository readme/license/topic pipeline

pub mod connection;
pub mod enrich;
pub mod parse;
pub mod types;

pub use connection::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, GitHubConnection};
pub use enrich::{enrich_repository, materialize_topics};
pub use parse::{parse_license, parse_listing, parse_readme};
pub use types::{
    LICENSE_MEDIA_TYPE, LicenseEnvelope, LicenseInfo, README_MEDIA_TYPE, STARRED_MEDIA_TYPE,
    StarredRepository,
};
