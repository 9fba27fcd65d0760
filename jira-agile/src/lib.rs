//! # Jira Agile API Client
//!
//! Provides the request/response pipeline shared by every Jira Agile REST
//! endpoint: resolving relative API paths against the configured site,
//! serializing JSON payloads, building authenticated requests, executing them
//! and decoding responses into caller-owned structures while keeping the
//! diagnostic envelope ([`ResponseScheme`]) around for every completed call.

pub mod auth;
mod client;
pub mod config;
pub mod consts;
mod error;
pub mod models;
pub mod netrc;
mod payload;
mod request;
mod response;
mod transport;

// Re-export the client
pub use client::{AgileClient, AgileClientBuilder};
pub use error::{AgileError, Result};
// Re-export models
pub use models::{AuthConfig, BasicAuth, Credentials, JiraErrorDocument};
pub use payload::{Payload, to_payload};
pub use response::{ResponseScheme, transform_response};
