//! Transfer client configuration.

use std::sync::Arc;

use rustshuttle_s3_model::ProvideCredentials;
use typed_builder::TypedBuilder;

/// Configuration for setting up a transfer client.
///
/// Carries the engine-setup surface: the target region and the one-shot
/// credentials accessor. Credentials are resolved exactly once, at client
/// construction.
#[derive(Debug, Clone, TypedBuilder)]
pub struct TransferConfig {
    /// Target region for transfers.
    #[builder(default = String::from("us-east-1"), setter(into))]
    pub region: String,

    /// One-shot accessor for the credentials used by the engine.
    pub credentials_provider: Arc<dyn ProvideCredentials>,
}

impl TransferConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `RUSTSHUTTLE_REGION` (default `us-east-1`). The credentials
    /// accessor cannot come from the environment — resolution policy is
    /// out of scope here — so the caller supplies it.
    #[must_use]
    pub fn from_env(credentials_provider: Arc<dyn ProvideCredentials>) -> Self {
        let region = std::env::var("RUSTSHUTTLE_REGION")
            .unwrap_or_else(|_| String::from("us-east-1"));
        Self {
            region,
            credentials_provider,
        }
    }
}
