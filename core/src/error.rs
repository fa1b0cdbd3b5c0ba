//! Error types for the todo API client.
//!
//! `NotFound` gets its own variant because callers distinguish "the todo does
//! not exist" from "the server answered with something unexpected". Every
//! other non-2xx response lands in `Server` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods, transports and the
/// controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404, or the todo is unknown locally.
    #[error("todo not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
