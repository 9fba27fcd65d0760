use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials for a Jira host, as discovered in `.netrc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Basic-auth pair sent with every request: account e-mail and API token
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
  pub mail: String,
  pub token: String,
}

impl fmt::Debug for BasicAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BasicAuth")
      .field("mail", &self.mail)
      .field("token", &"<redacted>")
      .finish()
  }
}

impl From<Credentials> for BasicAuth {
  fn from(credentials: Credentials) -> Self {
    Self {
      mail: credentials.username,
      token: credentials.password,
    }
  }
}

/// Authentication settings applied to every request of a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
  pub basic_auth: Option<BasicAuth>,
  pub user_agent: Option<String>,
}

/// Represents the error document Jira returns with failed requests
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraErrorDocument {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
}

impl JiraErrorDocument {
  /// Flatten general and per-field messages into one list
  pub fn messages(&self) -> Vec<String> {
    self
      .error_messages
      .iter()
      .cloned()
      .chain(self.errors.iter().map(|(field, message)| format!("{field}: {message}")))
      .collect()
  }
}
