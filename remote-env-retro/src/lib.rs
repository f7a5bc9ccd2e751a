#![warn(missing_docs)]
//! A JSON adaptation layer for remote-controlled retro game environments.
//!
//! Remote-controlled environments expose their state through a vectorized,
//! asynchronous interface whose native actions and observations are not
//! JSON-representable. This crate turns such an environment into a flat,
//! blocking, single-instance one behind a uniform JSON-friendly contract.
//!
//! [`Retro`] is the entry point. It validates that an environment belongs to
//! the remote-control family, applies named wrappers from the runtime's
//! [`WrapperRegistry`] and, on [`Retro::configure`], composes the runtime's
//! blocking and unvectorizing adapters around the environment before handing
//! it to the [`RetroEnv`] facade.
//!
//! ## Actions
//!
//! A native action batch is a sequence of control event sequences, one per
//! instance (see [`ControlEvent`]). [`RetroActionSpace::to_jsonable`] turns
//! each event tuple into the ordered list of its elements and
//! [`RetroActionSpace::from_jsonable`] is its exact inverse. Callers holding
//! a JSON action convert it back to the native representation before passing
//! it to [`RetroEnv::step`]; the facade itself never converts.
//!
//! ## Observations
//!
//! A native observation nests numeric arrays under string-keyed mappings
//! (see [`Observation`]). [`RetroObservationSpace::to_jsonable`] converts
//! array leaves to nested numeric sequences of the same shape and keeps the
//! key order and nesting of mappings; plain values pass through unchanged.
//!
//! [`ControlEvent`]: remote_env_core::ControlEvent
//! [`Observation`]: remote_env_core::Observation
mod act;
mod base;
mod config;
mod error;
mod obs;
mod retro;
mod runtime;
pub mod util;
pub use act::RetroActionSpace;
pub use base::RetroEnv;
pub use config::RetroConfig;
pub use error::RetroError;
pub use obs::RetroObservationSpace;
pub use retro::Retro;
pub use runtime::{RetroRuntime, WrapperFn, WrapperKind, WrapperRegistry};
