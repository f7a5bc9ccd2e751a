//! Interface of the external remote-environment runtime.
use crate::RetroError;
use remote_env_core::{Env, Options};
use std::fmt;
use std::str::FromStr;

/// A named environment wrapper shipped by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapperKind {
    /// Crops observations to the emulated screen region.
    CropObservations,
    /// Turns raw screen buffers into vision observations.
    Vision,
}

impl FromStr for WrapperKind {
    type Err = RetroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CropObservations" => Ok(Self::CropObservations),
            "Vision" => Ok(Self::Vision),
            _ => Err(RetroError::UnknownWrapper(s.to_string())),
        }
    }
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CropObservations => write!(f, "CropObservations"),
            Self::Vision => write!(f, "Vision"),
        }
    }
}

/// Constructor of a named wrapper, taking the environment to wrap and
/// named construction options.
pub type WrapperFn = Box<dyn Fn(Box<dyn Env>, &Options) -> anyhow::Result<Box<dyn Env>>>;

/// Immutable table of wrapper constructors, fixed for the lifetime of the
/// gateway that built it.
pub struct WrapperRegistry {
    entries: Vec<(WrapperKind, WrapperFn)>,
}

impl WrapperRegistry {
    /// Builds a registry from `(kind, constructor)` entries.
    pub fn new(entries: Vec<(WrapperKind, WrapperFn)>) -> Self {
        Self { entries }
    }

    /// Returns the constructor registered for `kind`.
    pub fn resolve(&self, kind: WrapperKind) -> Option<&WrapperFn> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, f)| f)
    }

    /// Registered wrapper kinds.
    pub fn kinds(&self) -> impl Iterator<Item = WrapperKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

/// Capability of the external remote-environment runtime.
///
/// The adaptation layer composes these entry points around an environment
/// during configuration; it implements no transport, rendering or
/// vectorization of its own.
pub trait RetroRuntime {
    /// The wrapper constructors the runtime ships.
    fn wrappers(&self) -> WrapperRegistry;

    /// Makes asynchronous reset and step calls appear synchronous.
    fn blocking_reset(&self, env: Box<dyn Env>) -> Box<dyn Env>;

    /// Collapses a vectorized environment to a single logical instance.
    fn unvectorize(&self, env: Box<dyn Env>) -> Box<dyn Env>;
}
