#![warn(missing_docs)]
//! Core interfaces of remote-controlled screen environments.
//!
//! A remote-controlled environment drives its state transitions by sending
//! control events to a remote display session instead of simulating them in
//! the current process. This crate defines the capability such environments
//! expose ([`Env`]), the native representation of their actions and
//! observations ([`Action`], [`Observation`]) and the open bag of named
//! configuration parameters forwarded to them ([`Options`]).
//!
//! Adaptation layers built on top of these interfaces, such as the JSON
//! facade in `remote-env-retro`, consume them without knowing anything about
//! the transport behind the remote session.
pub mod dummy;

mod act;
mod base;
mod obs;
mod options;
pub use act::{Action, ControlEvent};
pub use base::{Env, EnvFamily, Info, Space, Step};
pub use obs::Observation;
pub use options::Options;
