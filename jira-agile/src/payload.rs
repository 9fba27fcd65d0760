//! # Payload Serialization
//!
//! Encodes request structures as JSON request bodies.

use std::io::{self, Cursor, Read};

use reqwest::Body;
use serde::Serialize;

use crate::error::{AgileError, Result};

/// A JSON-encoded request body, readable as a byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
  reader: Cursor<Vec<u8>>,
}

impl Payload {
  /// The full encoded body, independent of the read position
  pub fn as_bytes(&self) -> &[u8] {
    self.reader.get_ref()
  }

  pub fn len(&self) -> usize {
    self.as_bytes().len()
  }

  pub fn is_empty(&self) -> bool {
    self.as_bytes().is_empty()
  }

  /// Consume the payload, returning the full encoded body
  pub fn into_bytes(self) -> Vec<u8> {
    self.reader.into_inner()
  }
}

impl Read for Payload {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    self.reader.read(buf)
  }
}

impl From<Payload> for Body {
  fn from(payload: Payload) -> Self {
    Body::from(payload.into_bytes())
  }
}

/// Serialize `structure` into a JSON payload.
///
/// An absent structure is a caller mistake for endpoints that take a body and
/// fails with [`AgileError::StructureNotProvided`] rather than producing an
/// empty payload.
pub fn to_payload<T: Serialize + ?Sized>(structure: Option<&T>) -> Result<Payload> {
  let structure = structure.ok_or(AgileError::StructureNotProvided)?;
  let bytes = serde_json::to_vec(structure).map_err(AgileError::Serialization)?;

  Ok(Payload {
    reader: Cursor::new(bytes),
  })
}
