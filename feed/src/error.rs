//! Error types for the feed crate
//!
//! `SourceError` covers everything the upstream content backend can do
//! wrong: transport failures, non-2xx responses, undecodable bodies, and
//! records that fail translation. The feed state itself has no failure
//! modes; a failed fetch aborts the attempted transition and the caller's
//! previous state stays the last known-good one.

use thiserror::Error;

/// Content source and translation errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("content API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("unauthorized - invalid access token")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("malformed record {uid:?}: missing or invalid {field}")]
    MalformedRecord {
        uid: Option<String>,
        field: &'static str,
    },
}
