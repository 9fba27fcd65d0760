//! Authentication helpers for the Agile client.
//!
//! These helpers centralize credential lookup so every consumer discovers
//! Jira credentials the same way before building an [`AgileClient`].

use std::path::Path;

use tracing::{debug, instrument};

use crate::client::{AgileClient, AgileClientBuilder};
use crate::config::agile_site;
use crate::consts::ATLASSIAN_MACHINE;
use crate::error::{AgileError, Result};
use crate::models::{AuthConfig, BasicAuth, Credentials};
use crate::netrc::{get_netrc_path, normalize_host, read_netrc_credentials};

/// Retrieve Jira credentials for `jira_host` from `.netrc` in `home`.
///
/// The entry for the host itself wins; `atlassian.net` is the fallback.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = get_netrc_path(home);

  let normalized_host = normalize_host(jira_host);
  if let Some(creds) = read_netrc_credentials(&netrc_path, &normalized_host)? {
    return Ok(creds);
  }
  if let Some(creds) = read_netrc_credentials(&netrc_path, ATLASSIAN_MACHINE)? {
    debug!("Using {ATLASSIAN_MACHINE} credentials for {normalized_host}");
    return Ok(creds);
  }

  Err(AgileError::Config(format!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or '{ATLASSIAN_MACHINE}'."
  )))
}

/// Prepares a client builder for `jira_host`, authenticated when `.netrc` has
/// credentials for it and anonymous when it has none.
///
/// A `.netrc` that exists but cannot be read is an error.
#[instrument(skip(home), level = "debug")]
pub fn agile_client_builder(home: &Path, jira_host: &str) -> Result<AgileClientBuilder> {
  let site = agile_site(jira_host)?;

  let auth = match get_jira_credentials(home, jira_host) {
    Ok(credentials) => AuthConfig {
      basic_auth: Some(BasicAuth::from(credentials)),
      user_agent: None,
    },
    Err(AgileError::Config(reason)) => {
      debug!("Continuing without credentials: {reason}");
      AuthConfig::default()
    }
    Err(e) => return Err(e),
  };

  Ok(AgileClient::builder(&site).auth(auth))
}

/// Creates an Agile client for `jira_host` using credentials from `.netrc`.
pub fn create_agile_client(home: &Path, jira_host: &str) -> Result<AgileClient> {
  agile_client_builder(home, jira_host)?.build()
}
