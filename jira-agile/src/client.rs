//! # Agile HTTP Client
//!
//! The client owns the shared transport, the base site URL and the
//! authentication settings. It is immutable once built, so a single instance
//! can be cloned into per-resource services and used concurrently.

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::models::{AuthConfig, BasicAuth};

/// Represents a Jira Agile API client
#[derive(Debug, Clone)]
pub struct AgileClient {
  pub(crate) http: Client,
  pub(crate) site: Url,
  pub(crate) auth: AuthConfig,
}

impl AgileClient {
  /// Create an unauthenticated client for `site` using a default transport
  pub fn new(site: &str) -> Result<Self> {
    Self::builder(site).build()
  }

  /// Start configuring a client for `site`
  pub fn builder(site: &str) -> AgileClientBuilder {
    AgileClientBuilder {
      site: site.to_string(),
      http: None,
      auth: AuthConfig::default(),
    }
  }

  /// Base URL every relative API path is resolved against
  pub fn site(&self) -> &Url {
    &self.site
  }

  pub fn auth(&self) -> &AuthConfig {
    &self.auth
  }

  /// Resolve a relative API path against the site.
  ///
  /// Uses RFC 3986 reference resolution, so query strings and `..` segments
  /// compose the way a browser would compose them.
  pub fn resolve_endpoint(&self, api_endpoint: &str) -> Result<Url> {
    let endpoint = self.site.join(api_endpoint)?;
    debug!("Resolved {api_endpoint} to {endpoint}");
    Ok(endpoint)
  }
}

/// Builder for [`AgileClient`]
#[derive(Debug)]
pub struct AgileClientBuilder {
  site: String,
  http: Option<Client>,
  auth: AuthConfig,
}

impl AgileClientBuilder {
  /// Use a caller-supplied transport, e.g. one with timeouts or a proxy
  pub fn http_client(mut self, http: Client) -> Self {
    self.http = Some(http);
    self
  }

  /// Send basic-auth credentials with every request
  pub fn basic_auth(mut self, mail: &str, token: &str) -> Self {
    self.auth.basic_auth = Some(BasicAuth {
      mail: mail.to_string(),
      token: token.to_string(),
    });
    self
  }

  /// Override the User-Agent header sent with every request
  pub fn user_agent(mut self, agent: &str) -> Self {
    self.auth.user_agent = Some(agent.to_string());
    self
  }

  /// Replace the whole authentication configuration
  pub fn auth(mut self, auth: AuthConfig) -> Self {
    self.auth = auth;
    self
  }

  /// Parse the site and build the client
  pub fn build(self) -> Result<AgileClient> {
    let mut site = self.site.trim().to_string();
    if !site.ends_with('/') {
      site.push('/');
    }

    Ok(AgileClient {
      http: self.http.unwrap_or_default(),
      site: Url::parse(&site)?,
      auth: self.auth,
    })
  }
}
