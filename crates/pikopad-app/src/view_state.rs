//! View state machine
//!
//! Exactly one of the fixed views is active at any time. The active view and
//! its tab selector are derived from the same field, so they always switch
//! together.

use pikopad_core::prelude::*;
use pikopad_core::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStateMachine {
    active: ViewId,
}

impl ViewStateMachine {
    pub fn new(initial: ViewId) -> Self {
        Self { active: initial }
    }

    /// Start from a configured view id, falling back to the code view
    pub fn from_config(raw: &str) -> Self {
        let mut machine = Self::default();
        if !machine.activate_named(raw) {
            warn!("Unknown initial view '{}', starting in code view", raw);
        }
        machine
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    /// Make `view` the only active view. Re-activating the current view is a no-op.
    pub fn activate(&mut self, view: ViewId) {
        if self.active != view {
            debug!("View {} -> {}", self.active, view);
        }
        self.active = view;
    }

    /// Activate a view by host id (`"help"`, `"help-tab"`, ...).
    ///
    /// Returns `false` and leaves the state untouched when nothing matches.
    pub fn activate_named(&mut self, raw: &str) -> bool {
        match ViewId::from_id(raw) {
            Some(view) => {
                self.activate(view);
                true
            }
            None => false,
        }
    }

    pub fn is_view_active(&self, view: ViewId) -> bool {
        self.active == view
    }

    pub fn is_selector_active(&self, view: ViewId) -> bool {
        self.active == view
    }
}
