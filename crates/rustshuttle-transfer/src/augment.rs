//! Header and query augmentation of in-construction engine requests.
//!
//! Two independent operations: encoding caller-supplied raw query
//! parameters into the engine's single-string query slot, and building the
//! engine's header list from the mandatory identifying entry plus any
//! caller-supplied header overrides.

use rustshuttle_engine_model::EngineHeader;
use rustshuttle_s3_model::OverrideConfig;

use crate::query::encode_query_params;
use crate::user_agent::{USER_AGENT_HEADER, user_agent};

/// Build the engine request's custom query string from an override
/// configuration.
///
/// Non-empty raw query parameters are percent-encoded, flattened, and
/// `?`-prefixed. An absent configuration or an empty parameter mapping
/// yields `None` — the engine request's query slot is then left untouched.
#[must_use]
pub fn custom_query_string(config: Option<&OverrideConfig>) -> Option<String> {
    let config = config?;
    if config.raw_query_parameters.is_empty() {
        return None;
    }
    encode_query_params(&config.raw_query_parameters).map(|encoded| format!("?{encoded}"))
}

/// Build the engine request's header list from an override configuration.
///
/// The list always starts with the mandatory entry identifying this
/// library and its transfer feature; caller-supplied headers follow, one
/// entry per (name, value) pair, in the mapping's iteration order and each
/// key's value-list order. The result is never empty.
#[must_use]
pub fn custom_headers(config: Option<&OverrideConfig>) -> Vec<EngineHeader> {
    let mut headers = vec![EngineHeader::new(USER_AGENT_HEADER, user_agent())];

    if let Some(config) = config {
        for (name, values) in &config.headers {
            for value in values {
                headers.push(EngineHeader::new(name, value));
            }
        }
    }

    headers
}
