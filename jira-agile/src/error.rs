//! # Error Types
//!
//! Every failure the request/response pipeline can report. Errors raised after
//! a response was received carry the [`ResponseScheme`] envelope so callers can
//! inspect status, headers and raw bytes without re-issuing the call.

use std::path::PathBuf;

use thiserror::Error;

use crate::response::ResponseScheme;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AgileError>;

/// Errors that can occur while building, sending or decoding an Agile API call
#[derive(Debug, Error)]
pub enum AgileError {
  #[error("URL parsing failed: {0}")]
  UrlParse(#[from] url::ParseError),

  #[error("failed to serialize the payload: no structure was provided")]
  StructureNotProvided,

  #[error("failed to serialize the payload: {0}")]
  Serialization(#[source] serde_json::Error),

  #[error("request creation failed: {0}")]
  RequestCreation(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// Network-level failure, surfaced as reported by the transport
  #[error(transparent)]
  Transport(reqwest::Error),

  #[error("validation failed, no HTTP response was provided")]
  NilResponse,

  #[error("request failed. Please analyze the request body for more details. Status Code: {code}")]
  RequestFailed { code: u16, response: Box<ResponseScheme> },

  #[error("failed to read the response body: {source}")]
  BodyRead {
    source: reqwest::Error,
    response: Box<ResponseScheme>,
  },

  #[error("failed to decode the response body: {source}")]
  Decode {
    source: serde_json::Error,
    response: Box<ResponseScheme>,
  },

  #[error("configuration error: {0}")]
  Config(String),

  /// An existing `.netrc` could not be read
  #[error("failed to read {}: {source}", path.display())]
  Netrc {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl AgileError {
  /// The envelope of the completed call, when a response was received
  pub fn response(&self) -> Option<&ResponseScheme> {
    match self {
      Self::RequestFailed { response, .. } | Self::BodyRead { response, .. } | Self::Decode { response, .. } => {
        Some(response.as_ref())
      }
      _ => None,
    }
  }

  /// Consume the error and hand back the envelope, if any
  pub fn into_response(self) -> Option<ResponseScheme> {
    match self {
      Self::RequestFailed { response, .. } | Self::BodyRead { response, .. } | Self::Decode { response, .. } => {
        Some(*response)
      }
      _ => None,
    }
  }

  /// HTTP status code of the call, when known
  pub fn status(&self) -> Option<u16> {
    self.response().map(|response| response.code)
  }
}
