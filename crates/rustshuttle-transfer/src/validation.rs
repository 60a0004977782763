//! Compatibility validation of per-request override configuration.
//!
//! The high-level API accepts a closed set of advanced override options
//! that the accelerated native path cannot honor. A request carrying any
//! of them must fail before translation begins; silently dropping an
//! option the caller asked for is not an acceptable outcome.

use rustshuttle_s3_model::OverrideConfig;

use crate::error::{TransferError, TransferResult};

/// Reject an override configuration that sets an advanced option the
/// native transfer path cannot honor.
///
/// Options are checked in a fixed order and the first violation wins, so
/// the error message is deterministic. An absent configuration always
/// validates.
///
/// # Errors
///
/// Returns [`TransferError::UnsupportedConfiguration`] naming the first
/// violated option.
pub fn validate_override_config(config: Option<&OverrideConfig>) -> TransferResult<()> {
    let Some(config) = config else {
        return Ok(());
    };

    if !config.metric_publishers.is_empty() {
        return Err(unsupported("metric publishers"));
    }
    if config.signer.is_some() {
        return Err(unsupported("a custom signer"));
    }
    if !config.api_names.is_empty() {
        return Err(unsupported("api names"));
    }
    if config.api_call_attempt_timeout.is_some() {
        return Err(unsupported("api call attempt timeout"));
    }
    if config.api_call_timeout.is_some() {
        return Err(unsupported("api call timeout"));
    }
    if config.credentials_provider.is_some() {
        return Err(unsupported("a request-level credentials provider"));
    }

    Ok(())
}

fn unsupported(option: &'static str) -> TransferError {
    TransferError::UnsupportedConfiguration { option }
}
