//! Per-operation request adaptation onto the native engine model.
//!
//! Field mapping rules:
//! - Plain fields are copied verbatim.
//! - Enumerated fields arrive as raw strings and are converted only
//!   through the engine model's strict parsers; an absent field skips
//!   parsing, a present-but-unrecognized value fails the adaptation.
//! - The override configuration is validated before translation, then
//!   feeds the header and query augmenters.
//! - Customer-supplied encryption key material is copied untransformed
//!   and kept out of every tracing event.

use std::str::FromStr;

use rustshuttle_engine_model::{
    EngineGetObjectRequest, EnginePutObjectRequest, UnknownEnumValueError,
};
use rustshuttle_s3_model::{GetObjectRequest, PutObjectRequest};
use tracing::debug;

use crate::augment::{custom_headers, custom_query_string};
use crate::error::TransferResult;
use crate::validation::validate_override_config;

/// Parse an optional string field through an engine enumeration.
fn parse_enum<T>(value: Option<&str>) -> Result<Option<T>, UnknownEnumValueError>
where
    T: FromStr<Err = UnknownEnumValueError>,
{
    value.map(str::parse).transpose()
}

/// Adapt a retrieve-object request onto the engine model.
///
/// # Errors
///
/// Fails with [`TransferError::UnsupportedConfiguration`] if the request's
/// override configuration sets an advanced option the native path cannot
/// honor.
///
/// [`TransferError::UnsupportedConfiguration`]: crate::TransferError::UnsupportedConfiguration
pub fn to_engine_get_object_request(
    request: &GetObjectRequest,
) -> TransferResult<EngineGetObjectRequest> {
    let override_config = request.override_config.as_ref();
    validate_override_config(override_config)?;

    let engine_request = EngineGetObjectRequest {
        bucket: request.bucket.clone(),
        key: request.key.clone(),
        expected_bucket_owner: request.expected_bucket_owner.clone(),
        if_match: request.if_match.clone(),
        if_modified_since: request.if_modified_since,
        if_none_match: request.if_none_match.clone(),
        custom_headers: custom_headers(override_config),
        custom_query_parameters: custom_query_string(override_config),
    };

    debug!(
        bucket = %engine_request.bucket,
        key = %engine_request.key,
        custom_header_count = engine_request.custom_headers.len(),
        "adapted retrieve-object request for the native engine"
    );
    Ok(engine_request)
}

/// Adapt a store-object request onto the engine model.
///
/// # Errors
///
/// Fails with [`TransferError::UnsupportedConfiguration`] for an override
/// configuration the native path cannot honor, or with
/// [`TransferError::UnrecognizedEnumValue`] if an enumerated field carries
/// a value the engine does not recognize.
///
/// [`TransferError::UnsupportedConfiguration`]: crate::TransferError::UnsupportedConfiguration
/// [`TransferError::UnrecognizedEnumValue`]: crate::TransferError::UnrecognizedEnumValue
pub fn to_engine_put_object_request(
    request: &PutObjectRequest,
) -> TransferResult<EnginePutObjectRequest> {
    let override_config = request.override_config.as_ref();
    validate_override_config(override_config)?;

    let engine_request = EnginePutObjectRequest {
        bucket: request.bucket.clone(),
        key: request.key.clone(),
        content_length: request.content_length,
        content_md5: request.content_md5.clone(),
        acl: parse_enum(request.acl.as_deref())?,
        bucket_key_enabled: request.bucket_key_enabled,
        cache_control: request.cache_control.clone(),
        content_disposition: request.content_disposition.clone(),
        content_encoding: request.content_encoding.clone(),
        content_language: request.content_language.clone(),
        content_type: request.content_type.clone(),
        expected_bucket_owner: request.expected_bucket_owner.clone(),
        expires: request.expires.clone(),
        grant_full_control: request.grant_full_control.clone(),
        grant_read: request.grant_read.clone(),
        grant_read_acp: request.grant_read_acp.clone(),
        grant_write_acp: request.grant_write_acp.clone(),
        metadata: request.metadata.clone(),
        object_lock_legal_hold_status: parse_enum(
            request.object_lock_legal_hold_status.as_deref(),
        )?,
        object_lock_mode: parse_enum(request.object_lock_mode.as_deref())?,
        object_lock_retain_until_date: request.object_lock_retain_until_date,
        request_payer: parse_enum(request.request_payer.as_deref())?,
        server_side_encryption: parse_enum(request.server_side_encryption.as_deref())?,
        sse_customer_algorithm: request.sse_customer_algorithm.clone(),
        sse_customer_key: request.sse_customer_key.clone(),
        sse_customer_key_md5: request.sse_customer_key_md5.clone(),
        ssekms_encryption_context: request.ssekms_encryption_context.clone(),
        ssekms_key_id: request.ssekms_key_id.clone(),
        storage_class: parse_enum(request.storage_class.as_deref())?,
        tagging: request.tagging.clone(),
        website_redirect_location: request.website_redirect_location.clone(),
        custom_headers: custom_headers(override_config),
        custom_query_parameters: custom_query_string(override_config),
    };

    debug!(
        bucket = %engine_request.bucket,
        key = %engine_request.key,
        content_length = ?engine_request.content_length,
        "adapted store-object request for the native engine"
    );
    Ok(engine_request)
}
