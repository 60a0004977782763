//! Per-operation response types and transport-level response metadata.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use http::{HeaderMap, StatusCode};
use typed_builder::TypedBuilder;

/// Snapshot of the raw transport-level response for a transfer.
///
/// Carries the status code and the full ordered, multi-valued header set;
/// the native engine's per-operation output deliberately carries neither.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// HTTP status code of the transfer.
    pub status: StatusCode,
    /// All response headers, in wire order.
    pub headers: HeaderMap,
}

impl TransportResponse {
    /// Create a transport response snapshot.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }
}

/// Derived, non-protocol response information: a header snapshot keeping
/// the first value of every header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata(HashMap<String, String>);

impl ResponseMetadata {
    /// Reconstruct metadata from a transport response.
    ///
    /// For every header name, the first value of its value list is kept.
    /// Values that are not valid visible-ASCII text are skipped.
    #[must_use]
    pub fn from_transport(response: &TransportResponse) -> Self {
        let mut metadata = HashMap::new();
        for name in response.headers.keys() {
            let Some(value) = response.headers.get(name) else {
                continue;
            };
            if let Ok(text) = value.to_str() {
                metadata.insert(name.as_str().to_owned(), text.to_owned());
            }
        }
        Self(metadata)
    }

    /// Look up a metadata value by header name (lowercase).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of captured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Response for a retrieve-object transfer.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GetObjectResponse {
    /// Range units the service accepts.
    #[builder(default, setter(into, strip_option))]
    pub accept_ranges: Option<String>,
    /// Whether a bucket-scoped encryption key was used.
    #[builder(default, setter(strip_option))]
    pub bucket_key_enabled: Option<bool>,
    /// Caching directive stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub cache_control: Option<String>,
    /// Presentational disposition stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_disposition: Option<String>,
    /// Content encoding stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_encoding: Option<String>,
    /// Content language stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_language: Option<String>,
    /// Portion of the object returned, for ranged retrievals.
    #[builder(default, setter(into, strip_option))]
    pub content_range: Option<String>,
    /// Size of the returned body in bytes.
    #[builder(default, setter(strip_option))]
    pub content_length: Option<i64>,
    /// MIME type stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_type: Option<String>,
    /// Whether the retrieved version is a delete marker.
    #[builder(default, setter(strip_option))]
    pub delete_marker: Option<bool>,
    /// Entity tag of the object.
    #[builder(default, setter(into, strip_option))]
    pub e_tag: Option<String>,
    /// Expiration rule information.
    #[builder(default, setter(into, strip_option))]
    pub expiration: Option<String>,
    /// Expiry time stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub expires: Option<String>,
    /// Last modification time of the object.
    #[builder(default, setter(strip_option))]
    pub last_modified: Option<DateTime<Utc>>,
    /// User-defined metadata stored with the object.
    #[builder(default)]
    pub metadata: HashMap<String, String>,
    /// Header snapshot reconstructed from the transport response.
    pub response_metadata: ResponseMetadata,
    /// The raw transport response, unmodified.
    pub transport_response: TransportResponse,
}

/// Response for a store-object transfer.
#[derive(Debug, Clone, TypedBuilder)]
pub struct PutObjectResponse {
    /// Whether a bucket-scoped encryption key was used.
    #[builder(default, setter(strip_option))]
    pub bucket_key_enabled: Option<bool>,
    /// Entity tag of the stored object.
    #[builder(default, setter(into, strip_option))]
    pub e_tag: Option<String>,
    /// Expiration rule information.
    #[builder(default, setter(into, strip_option))]
    pub expiration: Option<String>,
    /// Echoed algorithm for customer-supplied encryption keys.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_algorithm: Option<String>,
    /// Echoed MD5 digest of the customer-supplied encryption key.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_key_md5: Option<String>,
    /// Encryption context for KMS-managed keys.
    #[builder(default, setter(into, strip_option))]
    pub ssekms_encryption_context: Option<String>,
    /// KMS key ID used for encryption.
    #[builder(default, setter(into, strip_option))]
    pub ssekms_key_id: Option<String>,
    /// Version ID assigned to the stored object.
    #[builder(default, setter(into, strip_option))]
    pub version_id: Option<String>,
    /// Who was charged for the request, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub request_charged: Option<String>,
    /// Server-side encryption applied, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub server_side_encryption: Option<String>,
    /// Header snapshot reconstructed from the transport response.
    pub response_metadata: ResponseMetadata,
    /// The raw transport response, unmodified.
    pub transport_response: TransportResponse,
}
