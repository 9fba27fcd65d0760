//! # Response Transformation
//!
//! Turns a raw HTTP response into the uniform [`ResponseScheme`] envelope and,
//! when a destination is supplied, decodes the JSON body into it.

use reqwest::header::HeaderMap;
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{AgileError, Result};
use crate::models::JiraErrorDocument;

/// Metadata and raw payload of a completed API call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseScheme {
  /// HTTP status code
  pub code: u16,
  /// Absolute URL of the request as issued
  pub endpoint: String,
  /// HTTP method of the request as issued
  pub method: String,
  /// Raw response body
  pub bytes: Vec<u8>,
  /// Response headers
  pub headers: HeaderMap,
}

impl ResponseScheme {
  /// Whether the status code is in the `[200, 300)` range
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.code)
  }

  /// The raw body as text, replacing invalid UTF-8 sequences
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.bytes).into_owned()
  }

  /// Messages from a Jira error document in the body, empty when there is none
  pub fn error_messages(&self) -> Vec<String> {
    serde_json::from_slice::<JiraErrorDocument>(&self.bytes)
      .map(|document| document.messages())
      .unwrap_or_default()
  }
}

/// Classify a response and build its envelope.
///
/// `method` and `endpoint` describe the request that produced `response`, as
/// it was issued: redirects followed by the transport do not change them. A status
/// outside `[200, 300)` yields [`AgileError::RequestFailed`]; the body is still
/// read on that path so the envelope carries the server's error document.
/// On success the body is copied into the envelope before it is decoded into
/// `destination`, so a [`AgileError::Decode`] still exposes the wire payload.
#[instrument(skip_all, level = "debug")]
pub async fn transform_response<T: DeserializeOwned>(
  method: &Method,
  endpoint: &Url,
  response: Option<Response>,
  destination: Option<&mut T>,
) -> Result<ResponseScheme> {
  let Some(response) = response else {
    return Err(AgileError::NilResponse);
  };

  let mut scheme = ResponseScheme {
    code: response.status().as_u16(),
    endpoint: endpoint.to_string(),
    method: method.to_string(),
    bytes: Vec::new(),
    headers: response.headers().clone(),
  };
  debug!(code = scheme.code, endpoint = %scheme.endpoint, method = %scheme.method, "Received response");

  if !scheme.is_success() {
    match response.bytes().await {
      Ok(body) => scheme.bytes = body.to_vec(),
      Err(e) => debug!("Failed to read body of unsuccessful response: {e}"),
    }
    warn!(code = scheme.code, endpoint = %scheme.endpoint, "Request failed");
    return Err(AgileError::RequestFailed {
      code: scheme.code,
      response: Box::new(scheme),
    });
  }

  match response.bytes().await {
    Ok(body) => scheme.bytes = body.to_vec(),
    Err(source) => {
      return Err(AgileError::BodyRead {
        source,
        response: Box::new(scheme),
      });
    }
  }

  if let Some(destination) = destination {
    match serde_json::from_slice::<T>(&scheme.bytes) {
      Ok(value) => *destination = value,
      Err(source) => {
        return Err(AgileError::Decode {
          source,
          response: Box::new(scheme),
        });
      }
    }
  }

  Ok(scheme)
}
