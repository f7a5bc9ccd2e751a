//! Native actions of remote-controlled environments.

/// A control event sent to the remote display session.
///
/// The variants correspond to the event tuples of the remote display
/// protocol: key events carry a key symbol and a press flag, pointer
/// events carry a position and a button mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Key event `(keysym, down)`.
    Key(i64, i64),
    /// Pointer event `(x, y, buttonmask)`.
    Pointer(i64, i64, i64),
}

/// A batch of actions, one control event sequence per instance.
pub type Action = Vec<Vec<ControlEvent>>;
