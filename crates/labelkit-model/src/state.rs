#![forbid(unsafe_code)]

//! Model state snapshots (feature `state-persistence`).
//!
//! When the entire widget state is captured for embedding, only values that
//! differ from the defaults are recorded. A default model therefore
//! serializes to an empty object, and restoring an empty snapshot yields the
//! default value again.

use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_VALUE, LabelModel};

/// Serializable snapshot of a [`LabelModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelState {
    /// The label value; `None` means "the default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl LabelState {
    /// Capture the state of a model, recording the value only when it
    /// differs from [`DEFAULT_VALUE`].
    #[must_use]
    pub fn capture(model: &LabelModel) -> Self {
        let value = model.with(|v| {
            if v == DEFAULT_VALUE {
                None
            } else {
                Some(v.to_string())
            }
        });
        Self { value }
    }

    /// The value this snapshot restores to.
    #[must_use]
    pub fn effective_value(&self) -> &str {
        self.value.as_deref().unwrap_or(DEFAULT_VALUE)
    }
}

impl LabelModel {
    /// Capture this model's state as a [`LabelState`].
    #[must_use]
    pub fn snapshot(&self) -> LabelState {
        LabelState::capture(self)
    }

    /// Apply a snapshot to this model. Goes through the normal mutation
    /// path, so subscribers fire if the value actually changes.
    pub fn restore(&self, state: &LabelState) {
        self.set_value(state.effective_value());
    }

    /// Create a model from a snapshot.
    #[must_use]
    pub fn from_state(state: &LabelState) -> Self {
        Self::with_value(state.effective_value())
    }
}
