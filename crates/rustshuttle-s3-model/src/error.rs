//! Error types for the high-level object storage model.

/// Error type for the high-level model.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum S3ModelError {
    /// A caller-supplied credentials accessor failed to produce credentials.
    #[error("credentials unavailable: {0}")]
    CredentialsUnavailable(String),
}
