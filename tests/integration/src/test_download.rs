//! Retrieve-object end-to-end adaptation tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rustshuttle_engine_model::EngineGetObjectOutput;
    use rustshuttle_s3_model::{GetObjectRequest, OverrideConfig};

    use crate::{test_client, transport_with};

    #[tokio::test]
    async fn test_should_adapt_retrieval_with_custom_headers() {
        let (client, engine) = test_client();
        *engine.transport.lock().expect("lock") = transport_with(&[("sample", "value")]);

        let request = GetObjectRequest::builder()
            .bucket("bucket")
            .key("obj")
            .override_config(
                OverrideConfig::builder()
                    .headers(BTreeMap::from([(
                        "sample".to_owned(),
                        vec!["value".to_owned()],
                    )]))
                    .build(),
            )
            .build();

        client.get_object(&request).await.expect("transfer succeeds");

        let seen = engine
            .seen_get
            .lock()
            .expect("lock")
            .clone()
            .expect("engine saw the request");
        assert_eq!(seen.bucket, "bucket");
        assert_eq!(seen.key, "obj");
        assert!(
            seen.custom_headers
                .iter()
                .any(|h| h.name == "sample" && h.value == "value"),
            "caller header override reaches the engine"
        );
        assert!(
            seen.custom_headers
                .iter()
                .any(|h| h.name == "User-Agent" && h.value.contains("ft/transfer")),
            "identifying header always reaches the engine"
        );
        assert!(
            seen.custom_query_parameters.is_none(),
            "no raw query parameters were supplied"
        );
    }

    #[tokio::test]
    async fn test_should_surface_engine_output_and_transport_metadata() {
        let (client, engine) = test_client();
        *engine.get_output.lock().expect("lock") = EngineGetObjectOutput::builder()
            .e_tag("\"abc\"")
            .content_length(11)
            .content_type("text/plain")
            .build();
        *engine.transport.lock().expect("lock") =
            transport_with(&[("sample", "value"), ("x-request-id", "req-7")]);

        let request = GetObjectRequest::builder().bucket("bucket").key("obj").build();
        let response = client.get_object(&request).await.expect("transfer succeeds");

        assert_eq!(response.e_tag.as_deref(), Some("\"abc\""));
        assert_eq!(response.content_length, Some(11));
        assert_eq!(response.content_type.as_deref(), Some("text/plain"));
        assert_eq!(response.response_metadata.get("sample"), Some("value"));
        assert_eq!(
            response.response_metadata.get("x-request-id"),
            Some("req-7")
        );
        assert!(
            response
                .transport_response
                .headers
                .contains_key("x-request-id"),
            "raw transport response is embedded unmodified"
        );
    }

    #[tokio::test]
    async fn test_should_forward_query_overrides_to_the_engine() {
        let (client, engine) = test_client();

        let request = GetObjectRequest::builder()
            .bucket("bucket")
            .key("obj")
            .override_config(
                OverrideConfig::builder()
                    .raw_query_parameters(BTreeMap::from([(
                        "tag".to_owned(),
                        vec!["a".to_owned(), "b".to_owned()],
                    )]))
                    .build(),
            )
            .build();

        client.get_object(&request).await.expect("transfer succeeds");

        let seen = engine
            .seen_get
            .lock()
            .expect("lock")
            .clone()
            .expect("engine saw the request");
        assert_eq!(seen.custom_query_parameters.as_deref(), Some("?tag=a&tag=b"));
    }
}
