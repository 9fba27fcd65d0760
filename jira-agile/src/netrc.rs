//! Helpers for reading credentials stored in `.netrc` files.

use std::path::{Path, PathBuf};

use crate::error::{AgileError, Result};
use crate::models::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Strip scheme and trailing slash so a host URL matches a `machine` entry.
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

#[derive(Default)]
struct NetrcEntry {
  machine: String,
  login: Option<String>,
  password: Option<String>,
}

impl NetrcEntry {
  fn into_credentials_for(self, target_machine: &str) -> Option<Credentials> {
    if self.machine != target_machine {
      return None;
    }
    Some(Credentials {
      username: self.login?,
      password: self.password?,
    })
  }
}

/// Find credentials for `target_machine` in `.netrc` formatted text.
///
/// Both single-line (`machine host login user password pass`) and multi-line
/// entries are accepted. Entries missing a login or password are skipped.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut tokens = content.split_whitespace();
  let mut entry: Option<NetrcEntry> = None;

  while let Some(token) = tokens.next() {
    match token {
      "machine" => {
        if let Some(found) = entry.take().and_then(|e| e.into_credentials_for(target_machine)) {
          return Some(found);
        }
        entry = tokens.next().map(|machine| NetrcEntry {
          machine: machine.to_string(),
          ..Default::default()
        });
      }
      "login" => {
        let value = tokens.next().map(str::to_string);
        if let Some(entry) = entry.as_mut() {
          entry.login = value;
        }
      }
      "password" => {
        let value = tokens.next().map(str::to_string);
        if let Some(entry) = entry.as_mut() {
          entry.password = value;
        }
      }
      _ => {}
    }
  }

  entry.and_then(|e| e.into_credentials_for(target_machine))
}

/// Read credentials for `target_machine` from the `.netrc` file at `path`.
///
/// A missing file is not an error and yields `Ok(None)`. A file that exists
/// but cannot be read fails with [`AgileError::Netrc`].
pub fn read_netrc_credentials(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  if !path.exists() {
    return Ok(None);
  }

  let content = std::fs::read_to_string(path).map_err(|source| AgileError::Netrc {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(parse_netrc(&content, target_machine))
}
