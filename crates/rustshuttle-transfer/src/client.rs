//! Transfer client facade over an opaque native engine.
//!
//! The client owns no transport policy: it resolves and translates
//! credentials once at construction, then, per call, adapts the request,
//! hands it to the engine, and adapts the engine's output. Scheduling,
//! concurrency, retries, and cancellation are the engine's business.

use std::sync::Arc;

use async_trait::async_trait;
use rustshuttle_engine_model::{
    EngineCredentials, EngineError, EngineGetObjectOutput, EngineGetObjectRequest,
    EnginePutObjectOutput, EnginePutObjectRequest,
};
use rustshuttle_s3_model::{
    GetObjectRequest, GetObjectResponse, PutObjectRequest, PutObjectResponse, TransportResponse,
};
use tracing::debug;

use crate::config::TransferConfig;
use crate::credentials::resolve_engine_credentials;
use crate::error::TransferResult;
use crate::request::{to_engine_get_object_request, to_engine_put_object_request};
use crate::response::{from_engine_get_object_output, from_engine_put_object_output};

/// The opaque native transfer engine.
///
/// Implementations execute the actual object read/write over the network,
/// returning the per-operation output together with the raw transport
/// response (which the output deliberately does not carry).
#[async_trait]
pub trait TransferEngine: Send + Sync {
    /// Execute a retrieve-object transfer.
    async fn get_object(
        &self,
        request: EngineGetObjectRequest,
    ) -> Result<(EngineGetObjectOutput, TransportResponse), EngineError>;

    /// Execute a store-object transfer.
    async fn put_object(
        &self,
        request: EnginePutObjectRequest,
    ) -> Result<(EnginePutObjectOutput, TransportResponse), EngineError>;
}

#[async_trait]
impl<E: TransferEngine + ?Sized> TransferEngine for Arc<E> {
    async fn get_object(
        &self,
        request: EngineGetObjectRequest,
    ) -> Result<(EngineGetObjectOutput, TransportResponse), EngineError> {
        (**self).get_object(request).await
    }

    async fn put_object(
        &self,
        request: EnginePutObjectRequest,
    ) -> Result<(EnginePutObjectOutput, TransportResponse), EngineError> {
        (**self).put_object(request).await
    }
}

/// High-throughput transfer client bridging the public model and a native
/// engine.
#[derive(Debug)]
pub struct TransferClient<E> {
    engine: E,
    config: TransferConfig,
    engine_credentials: EngineCredentials,
}

impl<E: TransferEngine> TransferClient<E> {
    /// Create a client, resolving and translating credentials once.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the configured credentials accessor.
    pub fn new(config: TransferConfig, engine: E) -> TransferResult<Self> {
        let engine_credentials =
            resolve_engine_credentials(config.credentials_provider.as_ref())?;
        debug!(region = %config.region, "transfer client ready");
        Ok(Self {
            engine,
            config,
            engine_credentials,
        })
    }

    /// The region transfers are directed at.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// The translated credentials handed to the engine.
    #[must_use]
    pub fn engine_credentials(&self) -> &EngineCredentials {
        &self.engine_credentials
    }

    /// Retrieve a single object.
    ///
    /// # Errors
    ///
    /// Fails if request adaptation rejects the request, or with the
    /// engine's own error if the transfer fails.
    pub async fn get_object(
        &self,
        request: &GetObjectRequest,
    ) -> TransferResult<GetObjectResponse> {
        let engine_request = to_engine_get_object_request(request)?;
        let (output, transport_response) = self.engine.get_object(engine_request).await?;
        Ok(from_engine_get_object_output(output, transport_response))
    }

    /// Store a single object.
    ///
    /// # Errors
    ///
    /// Fails if request adaptation rejects the request, or with the
    /// engine's own error if the transfer fails.
    pub async fn put_object(
        &self,
        request: &PutObjectRequest,
    ) -> TransferResult<PutObjectResponse> {
        let engine_request = to_engine_put_object_request(request)?;
        let (output, transport_response) = self.engine.put_object(engine_request).await?;
        Ok(from_engine_put_object_output(output, transport_response))
    }
}
