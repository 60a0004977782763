//! Byte-encoded credentials handed to the native transfer engine.

use bytes::Bytes;

/// Credentials in the byte-encoded form the native engine consumes.
///
/// Produced by encoding an already-resolved credential value; the engine
/// model performs no resolution of its own.
#[derive(Clone, Default)]
pub struct EngineCredentials {
    /// Byte-encoded access key ID.
    pub access_key_id: Bytes,
    /// Byte-encoded secret access key.
    pub secret_access_key: Bytes,
    /// Byte-encoded session token, for temporary credentials only.
    pub session_token: Option<Bytes>,
}

impl EngineCredentials {
    /// Create engine credentials from already-encoded parts.
    #[must_use]
    pub fn new(
        access_key_id: Bytes,
        secret_access_key: Bytes,
        session_token: Option<Bytes>,
    ) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            session_token,
        }
    }
}

impl std::fmt::Debug for EngineCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
