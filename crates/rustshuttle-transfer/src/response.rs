//! Per-operation response adaptation from the native engine model.
//!
//! Engine outputs carry protocol-level fields only; the raw transport
//! response is supplied separately and is the source both for the
//! reconstructed [`ResponseMetadata`] snapshot and for the embedded raw
//! response object.

use rustshuttle_engine_model::{EngineGetObjectOutput, EnginePutObjectOutput};
use rustshuttle_s3_model::{
    GetObjectResponse, PutObjectResponse, ResponseMetadata, TransportResponse,
};
use tracing::debug;

/// Adapt a retrieve-object engine output into the public response type.
///
/// Protocol fields are copied verbatim; the metadata snapshot keeps the
/// first value of every transport header, and the transport response is
/// embedded unmodified.
#[must_use]
pub fn from_engine_get_object_output(
    output: EngineGetObjectOutput,
    transport_response: TransportResponse,
) -> GetObjectResponse {
    let response_metadata = ResponseMetadata::from_transport(&transport_response);
    debug!(
        status = %transport_response.status,
        metadata_entries = response_metadata.len(),
        "adapted retrieve-object response from the native engine"
    );

    GetObjectResponse {
        accept_ranges: output.accept_ranges,
        bucket_key_enabled: output.bucket_key_enabled,
        cache_control: output.cache_control,
        content_disposition: output.content_disposition,
        content_encoding: output.content_encoding,
        content_language: output.content_language,
        content_range: output.content_range,
        content_length: output.content_length,
        content_type: output.content_type,
        delete_marker: output.delete_marker,
        e_tag: output.e_tag,
        expiration: output.expiration,
        expires: output.expires,
        last_modified: output.last_modified,
        metadata: output.metadata,
        response_metadata,
        transport_response,
    }
}

/// Adapt a store-object engine output into the public response type.
///
/// The engine's typed charge and encryption indicators are decoded to
/// their string values when present. Transport metadata is attached the
/// same way as on the retrieval path.
#[must_use]
pub fn from_engine_put_object_output(
    output: EnginePutObjectOutput,
    transport_response: TransportResponse,
) -> PutObjectResponse {
    let response_metadata = ResponseMetadata::from_transport(&transport_response);
    debug!(
        status = %transport_response.status,
        "adapted store-object response from the native engine"
    );

    PutObjectResponse {
        bucket_key_enabled: output.bucket_key_enabled,
        e_tag: output.e_tag,
        expiration: output.expiration,
        sse_customer_algorithm: output.sse_customer_algorithm,
        sse_customer_key_md5: output.sse_customer_key_md5,
        ssekms_encryption_context: output.ssekms_encryption_context,
        ssekms_key_id: output.ssekms_key_id,
        version_id: output.version_id,
        request_charged: output
            .request_charged
            .map(|charged| charged.as_str().to_owned()),
        server_side_encryption: output
            .server_side_encryption
            .map(|sse| sse.as_str().to_owned()),
        response_metadata,
        transport_response,
    }
}
