//! Error types for the monday.com API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a successful response with an
//! empty `boards` array is a different failure from the remote rejecting the
//! query. Transport-level failures (network, non-2xx status) land in
//! `Transport`; anything wrong with a 2xx body lands in `Api`.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `MondayClient`.
#[derive(Debug, Error)]
pub enum MondayError {
    /// The client was constructed without a usable API token.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP round trip failed or returned a non-2xx status.
    #[error("HTTP Error: {0}")]
    Transport(#[from] TransportError),

    /// The response carried GraphQL errors, no data, or an unreadable body.
    #[error("GraphQL Error: {0}")]
    Api(String),

    /// The remote answered successfully but the requested board was absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
