//! Configuration of the Retro gateway.
use serde::{Deserialize, Serialize};

/// Configuration of [`Retro`](crate::Retro).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetroConfig {
    pub(crate) enabled: bool,
}

impl Default for RetroConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

impl RetroConfig {
    /// Enables or disables the Retro integration.
    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }
}
