//! Named configuration options.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open set of named parameters forwarded to the configuration entry
/// point of an environment or a wrapper.
///
/// The adaptation layer never interprets these parameters; it only passes
/// them along. The receiving entry point rejects names or types it does
/// not accept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Options(Map<String, Value>);

impl Options {
    /// An empty set of options.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets a named option.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Returns the value of a named option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates over option names and values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns `true` if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
