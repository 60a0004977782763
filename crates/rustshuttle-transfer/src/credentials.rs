//! Translation of resolved credentials into the engine's byte-encoded form.

use bytes::Bytes;
use rustshuttle_engine_model::EngineCredentials;
use rustshuttle_s3_model::{Credentials, ProvideCredentials};

use crate::error::TransferResult;

/// Translate an already-resolved credential value into the native engine's
/// representation.
///
/// Access key ID and secret are UTF-8 byte-encoded; the session token is
/// encoded and attached only when the credential carries one. Pure and
/// total — no resolution call is made here.
#[must_use]
pub fn to_engine_credentials(credentials: &Credentials) -> EngineCredentials {
    EngineCredentials::new(
        Bytes::copy_from_slice(credentials.access_key_id.as_bytes()),
        Bytes::copy_from_slice(credentials.secret_access_key.as_bytes()),
        credentials
            .session_token
            .as_deref()
            .map(|token| Bytes::copy_from_slice(token.as_bytes())),
    )
}

/// Resolve credentials once through the caller's accessor, then translate.
///
/// This is the one-shot setup path: resolution happens exactly once, before
/// any per-request translation work.
///
/// # Errors
///
/// Propagates the accessor's failure unchanged.
pub fn resolve_engine_credentials(
    provider: &dyn ProvideCredentials,
) -> TransferResult<EngineCredentials> {
    let credentials = provider.provide_credentials()?;
    Ok(to_engine_credentials(&credentials))
}
