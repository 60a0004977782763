//! Per-operation output types produced by the native transfer engine.
//!
//! Outputs carry protocol-level fields only. Transport-level response
//! metadata (status code, raw headers) is not part of the engine model;
//! the engine hands the raw transport response to the caller separately.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use typed_builder::TypedBuilder;

use crate::types::{RequestCharged, ServerSideEncryption};

/// Engine output of a retrieve-object transfer.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct EngineGetObjectOutput {
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
}

/// Engine output of a store-object transfer.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct EnginePutObjectOutput {
    /// Whether a bucket-scoped encryption key was used.
    #[builder(default, setter(strip_option))]
    pub bucket_key_enabled: Option<bool>,
    /// Entity tag of the stored object.
    #[builder(default, setter(into, strip_option))]
    pub e_tag: Option<String>,
    /// Expiration rule information.
    #[builder(default, setter(into, strip_option))]
    pub expiration: Option<String>,
    /// Indicator that the requester was charged.
    #[builder(default, setter(strip_option))]
    pub request_charged: Option<RequestCharged>,
    /// Server-side encryption applied to the stored object.
    #[builder(default, setter(strip_option))]
    pub server_side_encryption: Option<ServerSideEncryption>,
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
}
