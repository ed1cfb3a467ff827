//! Client error types.

use slackbot_model::ModelError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while calling the remote API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Marshalling failure: bad parameter, read-only field supplied by the
    /// caller, or a payload that did not match its declared schema.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Transport-level failure, propagated unchanged from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success HTTP status.
    #[error("API call failed with status {status}: {error}")]
    Api { status: u16, error: String },

    /// The operation name is not present in the operation spec table.
    /// A configuration error; no HTTP call is made.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// A namespace module outlived the `Bot` that owned the shared
    /// transport.
    #[error("client has been dropped")]
    ClientGone,

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
