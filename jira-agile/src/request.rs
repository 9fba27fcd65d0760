//! # Request Building
//!
//! Builds authenticated HTTP requests for relative Agile API paths.

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request};
use tracing::{instrument, trace};

use crate::client::AgileClient;
use crate::consts;
use crate::error::{AgileError, Result};
use crate::payload::Payload;

impl AgileClient {
  /// Build a request for `api_endpoint`, relative to the client site.
  ///
  /// The body, when given, is sent as `application/json`. Configured basic
  /// auth and user agent are applied here so every request carries them.
  #[instrument(skip(self, payload), level = "debug")]
  pub fn new_request(&self, method: &str, api_endpoint: &str, payload: Option<Payload>) -> Result<Request> {
    let method = Method::from_bytes(method.as_bytes()).map_err(|e| AgileError::RequestCreation(Box::new(e)))?;
    let endpoint = self.resolve_endpoint(api_endpoint)?;

    let user_agent = self.auth.user_agent.as_deref().unwrap_or(consts::USER_AGENT);
    let mut builder = self
      .http
      .request(method, endpoint)
      .header(ACCEPT, consts::APPLICATION_JSON)
      .header(USER_AGENT, user_agent);

    if let Some(basic) = &self.auth.basic_auth {
      builder = builder.basic_auth(&basic.mail, Some(&basic.token));
    }

    if let Some(payload) = payload {
      trace!("Attaching {} byte payload", payload.len());
      builder = builder.header(CONTENT_TYPE, consts::APPLICATION_JSON).body(payload);
    }

    builder.build().map_err(|e| AgileError::RequestCreation(Box::new(e)))
  }
}
