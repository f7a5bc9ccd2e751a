//! Core capabilities.
mod env;
mod space;
mod step;
pub use env::{Env, EnvFamily};
pub use space::Space;
pub use step::{Info, Step};
