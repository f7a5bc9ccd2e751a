//! A pseudo action space for remote-controlled environments.
use crate::RetroError;
use remote_env_core::{Action, ControlEvent, Space};
use serde_json::Value;

/// Action space adapter.
///
/// The native action space of a remote-controlled environment is not
/// JSON-representable; its samples are batches of control event tuples.
/// This adapter converts whole batches between the native and the JSON
/// representation while preserving the batch structure exactly.
pub struct RetroActionSpace<'a> {
    #[allow(dead_code)]
    space: &'a dyn Space,
}

impl<'a> RetroActionSpace<'a> {
    /// Wraps a native action space.
    pub fn new(space: &'a dyn Space) -> Self {
        Self { space }
    }

    /// Sampling the native space does not yield valid control event
    /// batches, so this always fails.
    pub fn sample(&self) -> Result<Action, RetroError> {
        Err(RetroError::UnsupportedOperation)
    }

    /// Converts a batch of actions to its JSON representation.
    ///
    /// Each event tuple becomes the ordered list of its elements.
    pub fn to_jsonable(&self, sample_n: &Action) -> Value {
        Value::from(
            sample_n
                .iter()
                .map(|sample| Value::from(sample.iter().map(event_to_jsonable).collect::<Vec<_>>()))
                .collect::<Vec<_>>(),
        )
    }

    /// Converts a batch of actions from its JSON representation.
    ///
    /// The exact inverse of [`Self::to_jsonable`]. Sequences that do not
    /// match a known control event shape fail with
    /// [`RetroError::MalformedAction`].
    pub fn from_jsonable(&self, sample_n: &Value) -> Result<Action, RetroError> {
        as_array(sample_n)?
            .iter()
            .map(|sample| {
                as_array(sample)?
                    .iter()
                    .map(event_from_jsonable)
                    .collect::<Result<Vec<ControlEvent>, RetroError>>()
            })
            .collect()
    }
}

fn event_to_jsonable(event: &ControlEvent) -> Value {
    match *event {
        ControlEvent::Key(keysym, down) => Value::from(vec![keysym, down]),
        ControlEvent::Pointer(x, y, buttonmask) => Value::from(vec![x, y, buttonmask]),
    }
}

fn event_from_jsonable(event: &Value) -> Result<ControlEvent, RetroError> {
    let elems = as_array(event)?
        .iter()
        .map(|v| {
            v.as_i64()
                .ok_or_else(|| RetroError::MalformedAction(format!("not an integer: {}", v)))
        })
        .collect::<Result<Vec<i64>, RetroError>>()?;
    match elems[..] {
        [keysym, down] => Ok(ControlEvent::Key(keysym, down)),
        [x, y, buttonmask] => Ok(ControlEvent::Pointer(x, y, buttonmask)),
        _ => Err(RetroError::MalformedAction(format!(
            "bad event arity: {}",
            elems.len()
        ))),
    }
}

fn as_array(v: &Value) -> Result<&Vec<Value>, RetroError> {
    v.as_array()
        .ok_or_else(|| RetroError::MalformedAction(format!("not a sequence: {}", v)))
}
