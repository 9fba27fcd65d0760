//! Constants for the jira-agile client.

/// Default User-Agent header value, sent when no custom agent is configured
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Relative prefix of the Agile REST API below the Jira host
pub const API_PREFIX: &str = "rest/agile/1.0/";

/// Content type sent with JSON payloads and requested for responses
pub const APPLICATION_JSON: &str = "application/json";

/// Fallback `.netrc` machine for Atlassian Cloud credentials
pub const ATLASSIAN_MACHINE: &str = "atlassian.net";
