//! Resolved credentials and the one-shot credentials accessor.
//!
//! Resolution *policy* (rotation, caching, provider chains) is out of scope
//! for this crate: [`ProvideCredentials`] is the seam through which an
//! already-configured accessor hands over a single resolved value.

use crate::error::S3ModelError;

/// A resolved set of access credentials.
///
/// The presence of a session token distinguishes a temporary (session)
/// credential from a long-lived one.
#[derive(Clone, Default)]
pub struct Credentials {
    /// The access key ID.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// Optional session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Create credentials from the given parts.
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Whether this is a temporary (session) credential.
    #[must_use]
    pub fn is_session(&self) -> bool {
        self.session_token.is_some()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// A one-shot accessor for resolved credentials.
///
/// Implementations must return an already-resolved value; callers invoke
/// this once per transfer setup, before any translation work begins.
pub trait ProvideCredentials: Send + Sync + std::fmt::Debug {
    /// Return the resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns [`S3ModelError::CredentialsUnavailable`] if the accessor's
    /// own resolution already failed.
    fn provide_credentials(&self) -> Result<Credentials, S3ModelError>;
}

/// A credentials accessor that always returns one fixed value.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Create a provider returning the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, S3ModelError> {
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_redact_secrets_in_debug_output() {
        let creds = Credentials::new("AKIAEXAMPLE", "super-secret", Some("token".to_owned()));
        let rendered = format!("{creds:?}");

        assert!(rendered.contains("AKIAEXAMPLE"));
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_should_distinguish_session_credentials() {
        let long_lived = Credentials::new("ak", "sk", None);
        let session = Credentials::new("ak", "sk", Some("st".to_owned()));

        assert!(!long_lived.is_session());
        assert!(session.is_session());
    }

    #[test]
    fn test_should_provide_static_credentials() {
        let provider =
            StaticCredentialsProvider::new(Credentials::new("ak", "sk", None));
        let creds = provider.provide_credentials().expect("static provider");
        assert_eq!(creds.access_key_id, "ak");
    }
}
