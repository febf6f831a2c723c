use chrono_tz::Tz;
use thiserror::Error;

/// Error raised while validating a single field during record construction.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The timestamp string does not match the grammar the API uses.
    #[error("malformed timestamp {value:?}: {source}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The naive clock time falls in a DST gap of the canonical timezone.
    #[error("clock time {value:?} does not exist in timezone {timezone}")]
    NonexistentLocalTime { value: String, timezone: Tz },
}

/// Error raised while decoding a full API response payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON, a required field is missing, or a
    /// field has the wrong shape.
    #[error("malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
