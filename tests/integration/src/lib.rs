//! End-to-end adaptation tests for Rustshuttle.
//!
//! These tests drive the full client path — request adaptation, engine
//! call, response adaptation — against an in-process recording engine, so
//! they assert on exactly what the native engine would receive and on how
//! its output is surfaced.

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::StatusCode;
use rustshuttle_engine_model::{
    EngineError, EngineGetObjectOutput, EngineGetObjectRequest, EnginePutObjectOutput,
    EnginePutObjectRequest,
};
use rustshuttle_s3_model::{
    Credentials, StaticCredentialsProvider, TransportResponse,
};
use rustshuttle_transfer::{TransferClient, TransferConfig, TransferEngine};

mod test_download;
mod test_upload;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Engine double that records the adapted requests it receives and answers
/// with configurable canned outputs.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    /// Last retrieve-object request handed to the engine.
    pub seen_get: Mutex<Option<EngineGetObjectRequest>>,
    /// Last store-object request handed to the engine.
    pub seen_put: Mutex<Option<EnginePutObjectRequest>>,
    /// Output returned for retrieve-object transfers.
    pub get_output: Mutex<EngineGetObjectOutput>,
    /// Output returned for store-object transfers.
    pub put_output: Mutex<EnginePutObjectOutput>,
    /// Transport response returned alongside every output.
    pub transport: Mutex<TransportResponse>,
}

#[async_trait]
impl TransferEngine for RecordingEngine {
    async fn get_object(
        &self,
        request: EngineGetObjectRequest,
    ) -> Result<(EngineGetObjectOutput, TransportResponse), EngineError> {
        *self.seen_get.lock().expect("lock") = Some(request);
        Ok((
            self.get_output.lock().expect("lock").clone(),
            self.transport.lock().expect("lock").clone(),
        ))
    }

    async fn put_object(
        &self,
        request: EnginePutObjectRequest,
    ) -> Result<(EnginePutObjectOutput, TransportResponse), EngineError> {
        *self.seen_put.lock().expect("lock") = Some(request);
        Ok((
            self.put_output.lock().expect("lock").clone(),
            self.transport.lock().expect("lock").clone(),
        ))
    }
}

/// Build a transport response from literal header pairs.
pub fn transport_with(entries: &[(&str, &str)]) -> TransportResponse {
    let mut headers = HeaderMap::new();
    for (name, value) in entries {
        headers.append(
            name.parse::<HeaderName>().expect("valid header name"),
            HeaderValue::from_str(value).expect("valid header value"),
        );
    }
    TransportResponse::new(StatusCode::OK, headers)
}

/// Create a client wired to a fresh recording engine.
pub fn test_client() -> (TransferClient<Arc<RecordingEngine>>, Arc<RecordingEngine>) {
    init_tracing();

    let engine = Arc::new(RecordingEngine::default());
    let config = TransferConfig::builder()
        .credentials_provider(Arc::new(StaticCredentialsProvider::new(
            Credentials::new("AKIAINTEGRATION", "integration-secret", None),
        )) as _)
        .build();
    let client =
        TransferClient::new(config, Arc::clone(&engine)).expect("client builds");
    (client, engine)
}
