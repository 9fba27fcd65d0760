//! # Client Creation
//!
//! Builds the runtime and the Agile client used by CLI commands.

use anyhow::{Context, Result};
use directories::BaseDirs;
use jira_agile::AgileClient;
use jira_agile::auth::agile_client_builder;
use jira_agile::config::{ensure_url_scheme, resolve_jira_host};
use tokio::runtime::Runtime;

/// Pick the Jira host from the command line, falling back to $JIRA_HOST
pub fn get_jira_host(host: Option<&str>) -> Result<String> {
  match host {
    Some(host) => ensure_url_scheme(host).context("Invalid Jira host"),
    None => resolve_jira_host().context("No Jira host configured, pass --host or set JIRA_HOST"),
  }
}

/// Creates a tokio runtime and an Agile client for `jira_host`.
///
/// Credentials are read from `.netrc` in the user's home directory when
/// present; otherwise requests are sent anonymously.
pub fn create_agile_runtime_and_client(jira_host: &str, user_agent: Option<&str>) -> Result<(Runtime, AgileClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let base_dirs = BaseDirs::new().context("Could not determine home directory")?;

  let mut builder = agile_client_builder(base_dirs.home_dir(), jira_host).context("Failed to configure Agile client")?;
  if let Some(agent) = user_agent {
    builder = builder.user_agent(agent);
  }
  let client = builder.build().context("Failed to create Agile client")?;

  Ok((rt, client))
}
