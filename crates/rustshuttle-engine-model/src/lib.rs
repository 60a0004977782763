//! Request/response model of the native transfer engine.
//!
//! The engine itself — its transport, concurrency, and retry machinery —
//! is an opaque external system; this crate defines only the data model
//! through which it is driven: per-operation request types with
//! custom-header and custom-query injection points, per-operation output
//! types (protocol-level fields only, no transport metadata), byte-encoded
//! credentials, and the closed enumerations the engine accepts.
//!
//! Enumeration parsing is strict: every enum has a fallible [`FromStr`]
//! that rejects unrecognized string values with
//! [`UnknownEnumValueError`] instead of defaulting.
//!
//! [`FromStr`]: std::str::FromStr
//! [`UnknownEnumValueError`]: error::UnknownEnumValueError

pub mod credentials;
pub mod error;
pub mod output;
pub mod request;
pub mod types;

pub use credentials::EngineCredentials;
pub use error::{EngineError, UnknownEnumValueError};
pub use output::{EngineGetObjectOutput, EnginePutObjectOutput};
pub use request::{EngineGetObjectRequest, EngineHeader, EnginePutObjectRequest};
pub use types::{
    ObjectCannedAcl, ObjectLockLegalHoldStatus, ObjectLockMode, RequestCharged, RequestPayer,
    ServerSideEncryption, StorageClass,
};
