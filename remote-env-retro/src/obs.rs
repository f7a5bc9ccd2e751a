//! A pseudo observation space for remote-controlled environments.
use ndarray::ArrayViewD;
use remote_env_core::{Observation, Space};
use serde_json::{Map, Value};

/// Observation space adapter.
///
/// Observations may be numeric arrays or arbitrarily nested mappings of
/// such. This adapter converts a batch of them to the JSON representation;
/// the inverse direction is not needed because observations are produced
/// by the environment, not supplied by the caller.
pub struct RetroObservationSpace<'a> {
    #[allow(dead_code)]
    space: &'a dyn Space,
}

impl<'a> RetroObservationSpace<'a> {
    /// Wraps a native observation space.
    pub fn new(space: &'a dyn Space) -> Self {
        Self { space }
    }

    /// Converts a batch of observations to its JSON representation.
    ///
    /// Numeric array leaves become nested numeric sequences of the same
    /// shape and values; mappings keep their keys, key order and nesting;
    /// plain values pass through unchanged.
    pub fn to_jsonable(&self, sample_n: &[Observation]) -> Value {
        Value::from(sample_n.iter().map(to_jsonable).collect::<Vec<_>>())
    }
}

fn to_jsonable(obs: &Observation) -> Value {
    match obs {
        Observation::Array(arr) => array_to_jsonable(&arr.view()),
        Observation::Dict(entries) => {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key.clone(), to_jsonable(value));
            }
            Value::Object(map)
        }
        Observation::Value(value) => value.clone(),
    }
}

fn array_to_jsonable(arr: &ArrayViewD<f32>) -> Value {
    if arr.ndim() == 0 {
        match arr.first() {
            Some(x) => Value::from(*x),
            None => Value::Null,
        }
    } else {
        Value::from(
            arr.outer_iter()
                .map(|view| array_to_jsonable(&view))
                .collect::<Vec<_>>(),
        )
    }
}
