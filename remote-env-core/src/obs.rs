//! Native observations of remote-controlled environments.
use ndarray::ArrayD;
use serde_json::Value;

/// An observation of a single instance.
///
/// Observations nest arbitrarily deep: numeric arrays at the leaves,
/// string-keyed mappings above them and plain values passed through
/// untouched. Mapping entries keep their insertion order.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// A numeric array leaf.
    Array(ArrayD<f32>),
    /// A keyed mapping of nested observations.
    Dict(Vec<(String, Observation)>),
    /// A plain value, assumed to be JSON-safe already.
    Value(Value),
}
