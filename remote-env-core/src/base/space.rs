//! Native space capability.
use anyhow::Result;
use serde_json::Value;

/// A native space of actions or observations.
pub trait Space {
    /// Draws a random element of the space in its native terms.
    fn sample(&self) -> Result<Value>;
}
