//! Per-request override configuration.
//!
//! [`OverrideConfig`] is a side channel of request-level customization
//! layered on top of a base request: custom headers, raw query parameters,
//! and a closed set of advanced options. The advanced options are accepted
//! by the high-level API for source compatibility, but the accelerated
//! native transfer path cannot honor any of them — the adaptation layer
//! rejects a config that sets one before request construction.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use typed_builder::TypedBuilder;

use crate::credentials::ProvideCredentials;

/// A named API call, attributable in user-agent metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiName {
    /// Name of the calling API or tool.
    pub name: String,
    /// Version of the calling API or tool.
    pub version: String,
}

impl ApiName {
    /// Create an API name entry.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Publishes client-side metrics for completed API calls.
pub trait MetricPublisher: Send + Sync + std::fmt::Debug {
    /// Publish a single named measurement.
    fn publish(&self, name: &str, value: f64);
}

/// Computes an authentication signature for an outgoing request.
pub trait Signer: Send + Sync + std::fmt::Debug {
    /// Sign the given canonical request string, returning the signature.
    fn sign(&self, canonical_request: &str) -> String;
}

/// Request-level overrides layered on top of a base request.
///
/// Header and query-parameter mappings are ordered (`BTreeMap`) so that
/// the flattening performed during adaptation is deterministic; the value
/// list of each key keeps its insertion order.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct OverrideConfig {
    /// Custom headers, name to ordered value list.
    #[builder(default)]
    pub headers: BTreeMap<String, Vec<String>>,

    /// Raw (unencoded) query parameters, name to ordered value list.
    #[builder(default)]
    pub raw_query_parameters: BTreeMap<String, Vec<String>>,

    /// Metric publishers to notify for this call. Not supported by the
    /// accelerated transfer path.
    #[builder(default)]
    pub metric_publishers: Vec<Arc<dyn MetricPublisher>>,

    /// Custom request signer. Not supported by the accelerated transfer path.
    #[builder(default, setter(strip_option))]
    pub signer: Option<Arc<dyn Signer>>,

    /// Custom API names. Not supported by the accelerated transfer path.
    #[builder(default)]
    pub api_names: Vec<ApiName>,

    /// Per-attempt timeout. Not supported by the accelerated transfer path.
    #[builder(default, setter(strip_option))]
    pub api_call_attempt_timeout: Option<Duration>,

    /// Overall call timeout. Not supported by the accelerated transfer path.
    #[builder(default, setter(strip_option))]
    pub api_call_timeout: Option<Duration>,

    /// Inline credentials provider for this request only. Not supported by
    /// the accelerated transfer path.
    #[builder(default, setter(strip_option))]
    pub credentials_provider: Option<Arc<dyn ProvideCredentials>>,
}

impl OverrideConfig {
    /// Whether no advanced option is set.
    ///
    /// Headers and raw query parameters are representable on the native
    /// path and do not count as advanced options.
    #[must_use]
    pub fn has_no_advanced_options(&self) -> bool {
        self.metric_publishers.is_empty()
            && self.signer.is_none()
            && self.api_names.is_empty()
            && self.api_call_attempt_timeout.is_none()
            && self.api_call_timeout.is_none()
            && self.credentials_provider.is_none()
    }
}
