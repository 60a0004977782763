//! Error types for the adaptation layer.

use rustshuttle_engine_model::{EngineError, UnknownEnumValueError};
use rustshuttle_s3_model::S3ModelError;

/// Failure raised while adapting between the client and engine models, or
/// propagated from the engine by the client facade.
///
/// Every variant is non-retryable from this layer's point of view; retry
/// and recovery policy belong to the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransferError {
    /// The request's override configuration asks for a capability the
    /// accelerated transfer path cannot honor.
    #[error("unsupported override configuration: {option} cannot be honored by the accelerated transfer path")]
    UnsupportedConfiguration {
        /// The first violated option, in validation order.
        option: &'static str,
    },

    /// A string-typed enumerated field did not match any value the engine
    /// recognizes.
    #[error(transparent)]
    UnrecognizedEnumValue(#[from] UnknownEnumValueError),

    /// The caller-supplied credentials accessor failed.
    #[error(transparent)]
    Credentials(#[from] S3ModelError),

    /// The native engine failed while executing a transfer.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Convenience result type for adaptation operations.
pub type TransferResult<T> = Result<T, TransferError>;
