//! Errors in the adaptation layer.
use thiserror::Error;

/// Errors raised by the Retro adaptation layer.
#[derive(Error, Debug)]
pub enum RetroError {
    /// The Retro integration was disabled at construction time.
    #[error("Retro is not enabled")]
    NotEnabled,

    /// The innermost delegate of the supplied environment is not of the
    /// remote-control family.
    #[error("not a remote control environment")]
    InvalidEnvironment,

    /// The requested wrapper name is not in the registry.
    #[error("unknown wrapper: {0}")]
    UnknownWrapper(String),

    /// The target constructor or configuration entry point rejected the
    /// forwarded options; the underlying message is embedded.
    #[error("bad options: {0}")]
    InvalidOptions(String),

    /// The operation is never valid for this space.
    #[error("unable to sample remote control actions")]
    UnsupportedOperation,

    /// A JSON action did not match any control event shape.
    #[error("malformed action: {0}")]
    MalformedAction(String),
}
