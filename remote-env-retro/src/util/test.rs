//! Utilities for tests.
use crate::{RetroRuntime, WrapperFn, WrapperKind, WrapperRegistry};
use anyhow::{bail, Result};
use remote_env_core::{Action, Env, EnvFamily, Observation, Options, Space, Step};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared log of wrapper activity, in call order.
pub type Trace = Rc<RefCell<Vec<String>>>;

/// Pass-through wrapper that records construction and delegation in a
/// shared [`Trace`].
pub struct TaggedEnv {
    inner: Box<dyn Env>,
    label: &'static str,
    trace: Trace,
}

impl TaggedEnv {
    /// Wraps `inner` and records the construction.
    pub fn new(inner: Box<dyn Env>, label: &'static str, trace: &Trace) -> Self {
        trace.borrow_mut().push(format!("new:{}", label));
        Self {
            inner,
            label,
            trace: Rc::clone(trace),
        }
    }
}

impl Env for TaggedEnv {
    fn reset(&mut self) -> Result<Vec<Observation>> {
        self.trace
            .borrow_mut()
            .push(format!("reset:{}", self.label));
        self.inner.reset()
    }

    fn step(&mut self, act: &Action) -> Result<Step> {
        self.trace.borrow_mut().push(format!("step:{}", self.label));
        self.inner.step(act)
    }

    fn configure(&mut self, options: &Options) -> Result<()> {
        self.inner.configure(options)
    }

    fn action_space(&self) -> &dyn Space {
        self.inner.action_space()
    }

    fn observation_space(&self) -> &dyn Space {
        self.inner.observation_space()
    }

    fn unwrapped(&self) -> &dyn Env {
        self.inner.unwrapped()
    }

    fn family(&self) -> EnvFamily {
        self.inner.family()
    }
}

/// Runtime double whose wrappers and adapters are pass-through
/// [`TaggedEnv`]s, so tests can observe the composition.
///
/// The `Vision` wrapper takes no construction options; `CropObservations`
/// accepts the single option `region`.
pub struct NullRuntime {
    trace: Trace,
}

impl NullRuntime {
    /// Creates the runtime and the trace it writes to.
    pub fn new() -> (Self, Trace) {
        let trace = Trace::default();
        (
            Self {
                trace: Rc::clone(&trace),
            },
            trace,
        )
    }
}

impl RetroRuntime for NullRuntime {
    fn wrappers(&self) -> WrapperRegistry {
        let crop: WrapperFn = {
            let trace = Rc::clone(&self.trace);
            Box::new(move |env, options: &Options| {
                for (key, _) in options.iter() {
                    if key != "region" {
                        bail!(
                            "CropObservations() got an unexpected keyword argument '{}'",
                            key
                        );
                    }
                }
                Ok(Box::new(TaggedEnv::new(env, "CropObservations", &trace)) as Box<dyn Env>)
            })
        };
        let vision: WrapperFn = {
            let trace = Rc::clone(&self.trace);
            Box::new(move |env, options: &Options| {
                if let Some((key, _)) = options.iter().next() {
                    bail!("Vision() got an unexpected keyword argument '{}'", key);
                }
                Ok(Box::new(TaggedEnv::new(env, "Vision", &trace)) as Box<dyn Env>)
            })
        };
        WrapperRegistry::new(vec![
            (WrapperKind::CropObservations, crop),
            (WrapperKind::Vision, vision),
        ])
    }

    fn blocking_reset(&self, env: Box<dyn Env>) -> Box<dyn Env> {
        Box::new(TaggedEnv::new(env, "BlockingReset", &self.trace))
    }

    fn unvectorize(&self, env: Box<dyn Env>) -> Box<dyn Env> {
        Box::new(TaggedEnv::new(env, "Unvectorize", &self.trace))
    }
}
