//! Environment capability.
use super::{Space, Step};
use crate::{Action, Observation, Options};
use anyhow::Result;

/// Family of an environment, reported by its innermost delegate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvFamily {
    /// Driven by control events sent to a remote display session.
    RemoteControl,
    /// Simulated in the current process.
    InProcess,
}

/// Represents an environment, possibly wrapping another one.
///
/// Environments manage a batch of parallel instances as a single logical
/// unit; observations, rewards and termination flags carry one element per
/// instance. Wrappers implement this trait by delegating to the wrapped
/// environment and forward [`Env::unwrapped`] so that the innermost
/// delegate stays reachable for capability checks.
pub trait Env {
    /// Resets the environment and returns observations of all instances.
    fn reset(&mut self) -> Result<Vec<Observation>>;

    /// Runs a step of the environment's dynamics.
    fn step(&mut self, act: &Action) -> Result<Step>;

    /// Applies named configuration options.
    ///
    /// Unknown or mistyped options are rejected with an error describing
    /// the rejection.
    fn configure(&mut self, options: &Options) -> Result<()>;

    /// The native action space.
    fn action_space(&self) -> &dyn Space;

    /// The native observation space.
    fn observation_space(&self) -> &dyn Space;

    /// The innermost delegate.
    fn unwrapped(&self) -> &dyn Env;

    /// The family of this environment.
    fn family(&self) -> EnvFamily;
}
