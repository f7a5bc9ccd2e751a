//! A pseudo environment wrapper with JSON-friendly spaces.
use crate::{RetroActionSpace, RetroObservationSpace};
use anyhow::Result;
use log::trace;
use remote_env_core::{Action, Env, Observation, Step};

/// Wraps a configured environment and views its spaces through the
/// JSON adapters [`RetroActionSpace`] and [`RetroObservationSpace`].
///
/// `reset` and `step` delegate untouched; conversion to and from the JSON
/// representation happens only at the adapters' explicit entry points,
/// never implicitly on every interaction.
pub struct RetroEnv {
    env: Box<dyn Env>,
}

impl RetroEnv {
    /// Takes ownership of a configured environment.
    pub fn new(env: Box<dyn Env>) -> Self {
        Self { env }
    }

    /// Resets the environment.
    pub fn reset(&mut self) -> Result<Vec<Observation>> {
        trace!("RetroEnv::reset()");
        self.env.reset()
    }

    /// Takes a step in the environment.
    ///
    /// `act` is the native representation; callers holding a JSON action
    /// convert it with [`RetroActionSpace::from_jsonable`] first.
    pub fn step(&mut self, act: &Action) -> Result<Step> {
        trace!("RetroEnv::step()");
        self.env.step(act)
    }

    /// The action space, viewed through the JSON adapter.
    pub fn action_space(&self) -> RetroActionSpace<'_> {
        RetroActionSpace::new(self.env.action_space())
    }

    /// The observation space, viewed through the JSON adapter.
    pub fn observation_space(&self) -> RetroObservationSpace<'_> {
        RetroObservationSpace::new(self.env.observation_space())
    }
}
