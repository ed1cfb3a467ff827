//! Marshalling error types.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building or decoding models.
///
/// All variants are caller-programming or validation errors: they are
/// raised at the point of misuse and are never retried.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A keyword parameter was supplied that the target schema does not
    /// declare. Raised before any transport call is made.
    #[error("unknown parameter `{name}` for {schema}")]
    UnknownParameter {
        schema: &'static str,
        name: String,
    },

    /// A read-only field was supplied by application code. Read-only
    /// fields may only be populated by deserializing server payloads.
    #[error("parameter `{name}` of {schema} is read-only")]
    ReadOnlyParameter {
        schema: &'static str,
        name: String,
    },

    /// A raw value did not match the declared type of a field, no
    /// candidate of a multi-type field matched, or an enum string was
    /// unrecognized.
    #[error("failed to decode {schema}: {source}")]
    Decode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized back to its raw form.
    #[error("failed to serialize {schema}: {source}")]
    Encode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A string could not be parsed as a Slack `ts` timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
