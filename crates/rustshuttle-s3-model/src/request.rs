//! Per-operation request types.
//!
//! Enumerated storage fields (`acl`, `object_lock_mode`, ...) are carried
//! as raw strings. The native engine model owns the closed value sets and
//! rejects unrecognized values when the request is adapted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use typed_builder::TypedBuilder;

use crate::override_config::OverrideConfig;

/// Request to retrieve a single object.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct GetObjectRequest {
    /// Container (bucket) holding the object.
    #[builder(setter(into))]
    pub bucket: String,
    /// Key of the object.
    #[builder(setter(into))]
    pub key: String,
    /// Expected account ID of the container owner.
    #[builder(default, setter(into, strip_option))]
    pub expected_bucket_owner: Option<String>,
    /// Return the object only if its entity tag matches.
    #[builder(default, setter(into, strip_option))]
    pub if_match: Option<String>,
    /// Return the object only if modified since this time.
    #[builder(default, setter(strip_option))]
    pub if_modified_since: Option<DateTime<Utc>>,
    /// Return the object only if its entity tag does not match.
    #[builder(default, setter(into, strip_option))]
    pub if_none_match: Option<String>,
    /// Request-level overrides.
    #[builder(default, setter(strip_option))]
    pub override_config: Option<OverrideConfig>,
}

/// Request to store a single object.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct PutObjectRequest {
    /// Container (bucket) to store into.
    #[builder(setter(into))]
    pub bucket: String,
    /// Key of the object.
    #[builder(setter(into))]
    pub key: String,
    /// Size of the object body in bytes.
    #[builder(default, setter(strip_option))]
    pub content_length: Option<i64>,
    /// Base64-encoded MD5 digest of the body.
    #[builder(default, setter(into, strip_option))]
    pub content_md5: Option<String>,
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
    /// MIME type stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_type: Option<String>,
    /// Expected account ID of the container owner.
    #[builder(default, setter(into, strip_option))]
    pub expected_bucket_owner: Option<String>,
    /// Expiry time stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub expires: Option<String>,
    /// Canned access-control list, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub acl: Option<String>,
    /// Grantee given full control.
    #[builder(default, setter(into, strip_option))]
    pub grant_full_control: Option<String>,
    /// Grantee given read access.
    #[builder(default, setter(into, strip_option))]
    pub grant_read: Option<String>,
    /// Grantee given read access to the object ACL.
    #[builder(default, setter(into, strip_option))]
    pub grant_read_acp: Option<String>,
    /// Grantee given write access to the object ACL.
    #[builder(default, setter(into, strip_option))]
    pub grant_write_acp: Option<String>,
    /// User-defined metadata stored with the object.
    #[builder(default)]
    pub metadata: HashMap<String, String>,
    /// Whether a bucket-scoped encryption key is used.
    #[builder(default, setter(strip_option))]
    pub bucket_key_enabled: Option<bool>,
    /// Server-side encryption algorithm, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub server_side_encryption: Option<String>,
    /// Algorithm for customer-supplied encryption keys.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_algorithm: Option<String>,
    /// Customer-supplied encryption key. Caller-provided secret; passed
    /// through untransformed and never logged.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_key: Option<String>,
    /// MD5 digest of the customer-supplied encryption key.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_key_md5: Option<String>,
    /// Encryption context for KMS-managed keys.
    #[builder(default, setter(into, strip_option))]
    pub ssekms_encryption_context: Option<String>,
    /// KMS key ID used for encryption.
    #[builder(default, setter(into, strip_option))]
    pub ssekms_key_id: Option<String>,
    /// Object lock mode, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub object_lock_mode: Option<String>,
    /// Object lock legal hold status, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub object_lock_legal_hold_status: Option<String>,
    /// Object lock retention expiry.
    #[builder(default, setter(strip_option))]
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// Who pays request charges, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub request_payer: Option<String>,
    /// Storage class, as its string value.
    #[builder(default, setter(into, strip_option))]
    pub storage_class: Option<String>,
    /// URL-encoded tag set stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub tagging: Option<String>,
    /// Redirect location for website-hosted containers.
    #[builder(default, setter(into, strip_option))]
    pub website_redirect_location: Option<String>,
    /// Request-level overrides.
    #[builder(default, setter(strip_option))]
    pub override_config: Option<OverrideConfig>,
}
