//! Named configuration sources.

use std::collections::HashMap;
use std::env;

/// A lookup of raw string settings by key.
///
/// Presence matters: a key that is set to the empty string is present.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl ConfigSource for Environment {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are still "set"; decode lossily instead of dropping them.
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

