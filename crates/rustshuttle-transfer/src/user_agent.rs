//! The process-wide identifying header value.

use std::sync::LazyLock;

/// Header name the identifying entry is sent under.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// Value identifying this library and its transfer feature, computed once
/// per process.
static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("rustshuttle/{} ft/transfer", env!("CARGO_PKG_VERSION")));

/// The identifying user-agent value attached to every engine request.
#[must_use]
pub fn user_agent() -> &'static str {
    &USER_AGENT
}
