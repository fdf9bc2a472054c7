//! Two-state UI control capability.
//!
//! A control exposes its visual state and notifies listeners when that state
//! changes. [`Checkbox`] is the only implementation.

use serde::{Deserialize, Serialize};

/// Visual state of a toggle control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    /// Neither checked nor unchecked, e.g. a parent of a partially selected list.
    Indeterminate,
}

impl CheckState {
    /// Value rendered in the `data-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }
}

/// Listener invoked with the new state after every change.
pub type ChangeListener = Box<dyn Fn(CheckState) + Send + Sync>;

/// Capability set of a toggle control: visual state plus change notification.
pub trait Toggle {
    fn state(&self) -> CheckState;

    /// Set the state, notifying listeners if it changed. Returns whether it changed.
    fn set_state(&mut self, state: CheckState) -> bool;

    /// Register a change listener.
    fn on_change(&mut self, listener: ChangeListener);

    /// User activation: indeterminate and unchecked become checked, checked becomes unchecked.
    fn toggle(&mut self) -> bool {
        let next = match self.state() {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked | CheckState::Indeterminate => CheckState::Checked,
        };
        self.set_state(next)
    }
}

/// A checkbox widget.
pub struct Checkbox {
    id: String,
    label: Option<String>,
    state: CheckState,
    disabled: bool,
    listeners: Vec<ChangeListener>,
}

impl Checkbox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            state: CheckState::Unchecked,
            disabled: false,
            listeners: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Initial state; does not notify.
    pub fn with_state(mut self, state: CheckState) -> Self {
        self.state = state;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Toggle for Checkbox {
    fn state(&self) -> CheckState {
        self.state
    }

    fn set_state(&mut self, state: CheckState) -> bool {
        if self.disabled || self.state == state {
            return false;
        }
        self.state = state;
        for listener in &self.listeners {
            listener(state);
        }
        true
    }

    fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod tests;
