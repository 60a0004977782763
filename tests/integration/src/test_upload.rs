//! Store-object end-to-end adaptation tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use rustshuttle_engine_model::{
        EnginePutObjectOutput, ObjectCannedAcl, RequestCharged, ServerSideEncryption,
    };
    use rustshuttle_s3_model::{OverrideConfig, PutObjectRequest};
    use rustshuttle_transfer::TransferError;

    use crate::{test_client, transport_with};

    #[tokio::test]
    async fn test_should_adapt_store_request_with_parsed_enums() {
        let (client, engine) = test_client();

        let request = PutObjectRequest::builder()
            .bucket("bucket")
            .key("obj")
            .content_length(17)
            .content_type("text/plain")
            .acl("private")
            .storage_class("STANDARD")
            .build();

        client.put_object(&request).await.expect("transfer succeeds");

        let seen = engine
            .seen_put
            .lock()
            .expect("lock")
            .clone()
            .expect("engine saw the request");
        assert_eq!(seen.bucket, "bucket");
        assert_eq!(seen.content_length, Some(17));
        assert_eq!(seen.acl, Some(ObjectCannedAcl::Private));
        assert!(
            seen.custom_headers
                .iter()
                .any(|h| h.name == "User-Agent"),
            "identifying header always reaches the engine"
        );
    }

    #[tokio::test]
    async fn test_should_reject_unrecognized_store_enum_before_the_engine_runs() {
        let (client, engine) = test_client();

        let request = PutObjectRequest::builder()
            .bucket("bucket")
            .key("obj")
            .acl("not-a-real-acl")
            .build();

        let err = client.put_object(&request).await.expect_err("should reject");
        assert!(matches!(err, TransferError::UnrecognizedEnumValue(_)));
        assert!(
            engine.seen_put.lock().expect("lock").is_none(),
            "rejected request never reaches the engine"
        );
    }

    #[tokio::test]
    async fn test_should_reject_unsupported_override_before_the_engine_runs() {
        let (client, engine) = test_client();

        let request = PutObjectRequest::builder()
            .bucket("bucket")
            .key("obj")
            .override_config(
                OverrideConfig::builder()
                    .api_call_timeout(Duration::from_secs(30))
                    .build(),
            )
            .build();

        let err = client.put_object(&request).await.expect_err("should reject");
        match err {
            TransferError::UnsupportedConfiguration { option } => {
                assert_eq!(option, "api call timeout");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(engine.seen_put.lock().expect("lock").is_none());
    }

    #[tokio::test]
    async fn test_should_decode_store_output_indicators() {
        let (client, engine) = test_client();
        *engine.put_output.lock().expect("lock") = EnginePutObjectOutput::builder()
            .e_tag("\"abc\"")
            .version_id("v1")
            .request_charged(RequestCharged::Requester)
            .server_side_encryption(ServerSideEncryption::Aes256)
            .build();
        *engine.transport.lock().expect("lock") =
            transport_with(&[("x-request-id", "req-9")]);

        let request = PutObjectRequest::builder().bucket("bucket").key("obj").build();
        let response = client.put_object(&request).await.expect("transfer succeeds");

        assert_eq!(response.e_tag.as_deref(), Some("\"abc\""));
        assert_eq!(response.version_id.as_deref(), Some("v1"));
        assert_eq!(response.request_charged.as_deref(), Some("requester"));
        assert_eq!(response.server_side_encryption.as_deref(), Some("AES256"));
        assert_eq!(
            response.response_metadata.get("x-request-id"),
            Some("req-9")
        );
    }

    #[tokio::test]
    async fn test_should_run_concurrent_transfers_independently() {
        let (client, _engine) = test_client();
        let client = Arc::new(client);

        let mut handles = Vec::new();
        for i in 0..8 {
            let client = Arc::clone(&client);
            handles.push(tokio::spawn(async move {
                let request = PutObjectRequest::builder()
                    .bucket("bucket")
                    .key(format!("obj-{i}"))
                    .build();
                client.put_object(&request).await
            }));
        }

        for handle in handles {
            handle.await.expect("task joins").expect("transfer succeeds");
        }
    }
}
