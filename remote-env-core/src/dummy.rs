//! This module is used for tests.
use crate::{Action, Env, EnvFamily, Info, Observation, Options, Space, Step};
use anyhow::{bail, Result};
use serde_json::Value;

/// Dummy space.
pub struct DummySpace;

impl Space for DummySpace {
    fn sample(&self) -> Result<Value> {
        Ok(Value::Null)
    }
}

/// Dummy remote-controlled environment.
///
/// `configure` accepts the single option `fps` and rejects anything else,
/// which is used to exercise option forwarding errors in tests.
pub struct DummyRemoteEnv {
    space: DummySpace,

    /// Options received through `configure`.
    pub configured: Option<Options>,

    /// Observations returned from `reset`.
    pub obs: Vec<Observation>,
}

impl DummyRemoteEnv {
    /// Creates an environment returning the given reset observations.
    pub fn new(obs: Vec<Observation>) -> Self {
        Self {
            space: DummySpace,
            configured: None,
            obs,
        }
    }
}

impl Env for DummyRemoteEnv {
    fn reset(&mut self) -> Result<Vec<Observation>> {
        Ok(self.obs.clone())
    }

    fn step(&mut self, act: &Action) -> Result<Step> {
        Ok(Step::new(
            self.obs.clone(),
            vec![0.0; act.len()],
            vec![0; act.len()],
            Info::new(),
        ))
    }

    fn configure(&mut self, options: &Options) -> Result<()> {
        for (key, _) in options.iter() {
            if key != "fps" {
                bail!("got an unexpected keyword argument '{}'", key);
            }
        }
        self.configured = Some(options.clone());
        Ok(())
    }

    fn action_space(&self) -> &dyn Space {
        &self.space
    }

    fn observation_space(&self) -> &dyn Space {
        &self.space
    }

    fn unwrapped(&self) -> &dyn Env {
        self
    }

    fn family(&self) -> EnvFamily {
        EnvFamily::RemoteControl
    }
}

/// Dummy in-process environment.
pub struct DummyInProcessEnv {
    space: DummySpace,
}

impl DummyInProcessEnv {
    /// Creates the environment.
    pub fn new() -> Self {
        Self { space: DummySpace }
    }
}

impl Default for DummyInProcessEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for DummyInProcessEnv {
    fn reset(&mut self) -> Result<Vec<Observation>> {
        unimplemented!();
    }

    fn step(&mut self, _act: &Action) -> Result<Step> {
        unimplemented!();
    }

    fn configure(&mut self, _options: &Options) -> Result<()> {
        unimplemented!();
    }

    fn action_space(&self) -> &dyn Space {
        &self.space
    }

    fn observation_space(&self) -> &dyn Space {
        &self.space
    }

    fn unwrapped(&self) -> &dyn Env {
        self
    }

    fn family(&self) -> EnvFamily {
        EnvFamily::InProcess
    }
}
