//! Environment step.
use crate::Observation;
use serde_json::{Map, Value};

/// Additional information attached to a step.
pub type Info = Map<String, Value>;

/// Observations, rewards and termination flags emitted at every
/// interaction step, one element per instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// Observations.
    pub obs: Vec<Observation>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Flags denoting if episodes are done.
    pub is_done: Vec<i8>,

    /// Information defined by the environment.
    pub info: Info,
}

impl Step {
    /// Constructs a [`Step`] object.
    pub fn new(obs: Vec<Observation>, reward: Vec<f32>, is_done: Vec<i8>, info: Info) -> Self {
        Self {
            obs,
            reward,
            is_done,
            info,
        }
    }
}
