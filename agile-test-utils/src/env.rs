//! Environment variable management for testing
//!
//! Tests that touch process-wide environment variables go through
//! [`EnvVarGuard`], which restores the original value when dropped.

use std::env;

/// RAII guard for a single environment variable
pub struct EnvVarGuard {
  key: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `key` so it can be restored on drop
  pub fn new(key: &str) -> Self {
    Self {
      key: key.to_string(),
      original: env::var(key).ok(),
    }
  }

  /// Set the variable for the lifetime of the guard
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.key, value);
    }
  }

  /// Remove the variable for the lifetime of the guard
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    unsafe {
      match &self.original {
        Some(value) => env::set_var(&self.key, value),
        None => env::remove_var(&self.key),
      }
    }
  }
}
