//! Error types surfaced by the native engine model.

/// A string value did not match any variant of a closed engine enumeration.
///
/// Raised by the model's own value parsers; never produced for an absent
/// field. Non-retryable: the caller must supply a recognized value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value {value:?} for {field}")]
pub struct UnknownEnumValueError {
    /// The enumeration that rejected the value.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

impl UnknownEnumValueError {
    /// Record a rejected value for the named enumeration.
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Failure reported by the native engine while executing a transfer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The service answered the transfer with an error.
    #[error("transfer engine service error (status {status}): {message}")]
    Service {
        /// HTTP status code of the failed transfer.
        status: u16,
        /// Service-provided error description.
        message: String,
    },

    /// The engine could not reach the service.
    #[error("transfer engine connection error: {0}")]
    Connection(String),
}
