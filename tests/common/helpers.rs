//! Test helper functions for integration tests

#![allow(dead_code)]

use std::collections::HashMap;

/// Temporarily set environment variables for the duration of a test
///
/// Returns a guard that will restore the original values when dropped.
pub struct EnvGuard {
    original: HashMap<String, Option<String>>,
}

impl EnvGuard {
    /// Create a new environment guard that sets the given variables
    pub fn new(vars: &[(&str, &str)]) -> Self {
        let mut original = HashMap::new();

        for (key, value) in vars {
            original.insert(key.to_string(), std::env::var(key).ok());
            std::env::set_var(key, value);
        }

        Self { original }
    }

    /// Create a guard that removes the given variables
    pub fn remove(vars: &[&str]) -> Self {
        let mut original = HashMap::new();

        for key in vars {
            original.insert(key.to_string(), std::env::var(key).ok());
            std::env::remove_var(key);
        }

        Self { original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.original {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
