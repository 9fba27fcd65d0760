//! # Transport
//!
//! Executes built requests with the shared transport and hands the response to
//! the transformer. Each call is a single attempt: retry and backoff policy is
//! left to the caller since arbitrary REST calls are not known to be
//! idempotent.

use reqwest::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::client::AgileClient;
use crate::error::{AgileError, Result};
use crate::payload::to_payload;
use crate::response::{ResponseScheme, transform_response};

impl AgileClient {
  /// Execute `request` and decode the JSON body into `destination`.
  ///
  /// The envelope describes `request` as issued, even when the transport
  /// followed a redirect.
  #[instrument(skip_all, fields(method = %request.method(), url = %request.url()), level = "debug")]
  pub async fn call<T: DeserializeOwned>(&self, request: Request, destination: Option<&mut T>) -> Result<ResponseScheme> {
    let method = request.method().clone();
    let endpoint = request.url().clone();

    let response = self.http.execute(request).await.map_err(AgileError::Transport)?;
    debug!("Transport returned {} from {}", response.status(), response.url());

    transform_response(&method, &endpoint, Some(response), destination).await
  }

  /// Execute `request` without decoding the body
  pub async fn execute(&self, request: Request) -> Result<ResponseScheme> {
    self.call::<serde_json::Value>(request, None).await
  }

  /// Run the whole pipeline: serialize `payload`, build the request, send it
  /// and decode the response into `destination`.
  ///
  /// Passing `None` as payload sends no body at all.
  pub async fn send<P, T>(
    &self,
    method: &str,
    api_endpoint: &str,
    payload: Option<&P>,
    destination: Option<&mut T>,
  ) -> Result<ResponseScheme>
  where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let payload = match payload {
      Some(structure) => Some(to_payload(Some(structure))?),
      None => None,
    };

    let request = self.new_request(method, api_endpoint, payload)?;
    self.call(request, destination).await
  }
}
