//! Per-operation request types accepted by the native transfer engine.
//!
//! Each request carries the operation's protocol fields plus two injection
//! points the caller may populate: a custom-header list and a single
//! pre-encoded custom query string.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use typed_builder::TypedBuilder;

use crate::types::{
    ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};

/// A single header entry on an engine request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl EngineHeader {
    /// Create a header entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Engine request to retrieve a single object.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct EngineGetObjectRequest {
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
    /// Caller-injected headers, sent verbatim with the transfer.
    #[builder(default)]
    pub custom_headers: Vec<EngineHeader>,
    /// Pre-encoded query string appended to the request, `?`-prefixed.
    #[builder(default, setter(into, strip_option))]
    pub custom_query_parameters: Option<String>,
}

/// Engine request to store a single object.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct EnginePutObjectRequest {
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
    /// Canned access-control list.
    #[builder(default, setter(strip_option))]
    pub acl: Option<ObjectCannedAcl>,
    /// Whether a bucket-scoped encryption key is used.
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
    /// MIME type stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub content_type: Option<String>,
    /// Expected account ID of the container owner.
    #[builder(default, setter(into, strip_option))]
    pub expected_bucket_owner: Option<String>,
    /// Expiry time stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub expires: Option<String>,
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
    /// Object lock legal hold status.
    #[builder(default, setter(strip_option))]
    pub object_lock_legal_hold_status: Option<ObjectLockLegalHoldStatus>,
    /// Object lock mode.
    #[builder(default, setter(strip_option))]
    pub object_lock_mode: Option<ObjectLockMode>,
    /// Object lock retention expiry.
    #[builder(default, setter(strip_option))]
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    /// Who pays the request charges.
    #[builder(default, setter(strip_option))]
    pub request_payer: Option<RequestPayer>,
    /// Server-side encryption algorithm.
    #[builder(default, setter(strip_option))]
    pub server_side_encryption: Option<ServerSideEncryption>,
    /// Algorithm for customer-supplied encryption keys.
    #[builder(default, setter(into, strip_option))]
    pub sse_customer_algorithm: Option<String>,
    /// Customer-supplied encryption key. Caller-provided secret.
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
    /// Storage class for the stored object.
    #[builder(default, setter(strip_option))]
    pub storage_class: Option<StorageClass>,
    /// URL-encoded tag set stored with the object.
    #[builder(default, setter(into, strip_option))]
    pub tagging: Option<String>,
    /// Redirect location for website-hosted containers.
    #[builder(default, setter(into, strip_option))]
    pub website_redirect_location: Option<String>,
    /// Caller-injected headers, sent verbatim with the transfer.
    #[builder(default)]
    pub custom_headers: Vec<EngineHeader>,
    /// Pre-encoded query string appended to the request, `?`-prefixed.
    #[builder(default, setter(into, strip_option))]
    pub custom_query_parameters: Option<String>,
}
