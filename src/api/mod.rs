//! Upstream search API access.
//!
//! ```text
//! SearchParameters
//!   ↓ query::encode
//! "startRecord=1&...&recordPacking=json"
//!   ↓ SearchApi::fetch(endpoint, query)
//! GET {base_url}/{meeting_list|meeting|speech}?{query}
//!   ↓
//! SearchEnvelope | ClientError
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod query;

pub use client::{KokkaiClient, SearchApi};
pub use config::ApiConfig;
pub use endpoint::Endpoint;
