//! High-level object storage request/response model for Rustshuttle.
//!
//! This crate defines the public-facing data model of the Rustshuttle
//! transfer client: per-operation request and response types, the
//! per-request [`OverrideConfig`] side channel, resolved [`Credentials`]
//! and the [`ProvideCredentials`] accessor, and the transport-level
//! response snapshot ([`TransportResponse`] / [`ResponseMetadata`]).
//!
//! All types are immutable value objects built via builders and never
//! mutated after construction. The model carries enumerated storage
//! fields (ACL, object lock, storage class, ...) as raw strings; the
//! native engine model is the single authority for their value sets and
//! rejects unrecognized values at adaptation time.

pub mod credentials;
pub mod error;
pub mod override_config;
pub mod request;
pub mod response;

pub use credentials::{Credentials, ProvideCredentials, StaticCredentialsProvider};
pub use error::S3ModelError;
pub use override_config::{ApiName, MetricPublisher, OverrideConfig, Signer};
pub use request::{GetObjectRequest, PutObjectRequest};
pub use response::{GetObjectResponse, PutObjectResponse, ResponseMetadata, TransportResponse};
