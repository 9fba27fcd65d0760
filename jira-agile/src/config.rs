//! Site configuration helpers.
//!
//! Turn the `JIRA_HOST` setting into the base URL the Agile API lives under.

use url::{Position, Url};

use crate::consts::API_PREFIX;
use crate::error::{AgileError, Result};

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Get the $JIRA_HOST environment variable value with proper URL scheme.
///
/// If the host doesn't include a scheme (http:// or https://), assumes https://.
pub fn resolve_jira_host() -> Result<String> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) => ensure_url_scheme(&host),
    Err(_) => Err(AgileError::Config(format!(
      "Jira host environment variable '{ENV_JIRA_HOST}' not set"
    ))),
  }
}

/// Ensure a host has a proper scheme (http:// or https://).
///
/// Inputs without a scheme get https://. A lone trailing slash is dropped so
/// the result can be used as a host prefix.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(AgileError::Config("Host cannot be empty".to_string()));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let url = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    Url::parse(trimmed)?
  } else {
    Url::parse(&format!("https://{trimmed}"))?
  };

  let mut result = url[..Position::BeforePath].to_string();
  if url.path() != "/" {
    result.push_str(url.path());
  }
  Ok(result)
}

/// Build the Agile API site for a Jira host, e.g.
/// `company.atlassian.net` -> `https://company.atlassian.net/rest/agile/1.0/`.
pub fn agile_site(host: &str) -> Result<String> {
  let host = ensure_url_scheme(host)?;
  Ok(format!("{}/{API_PREFIX}", host.trim_end_matches('/')))
}
