//! The navigation menu state machine.
//!
//! The state is an explicit enum with pure transition functions; a separate
//! render application step maps it onto the presentational markers (the
//! menu's class list and the toggle's expanded-state attribute). Invariant:
//! the menu carries [`ACTIVE_CLASS`] iff the state is `Open`, and the
//! toggle's attribute always equals the string form of the state.

use crate::page::{NavMenu, NavToggle};

/// Class marker carried by the menu container while open.
pub const ACTIVE_CLASS: &str = "active";

/// Open/closed condition of the collapsible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    /// The flipped state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            NavState::Closed => NavState::Open,
            NavState::Open => NavState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, NavState::Open)
    }

    /// String form mirrored into the toggle's expanded-state attribute.
    #[must_use]
    pub const fn as_aria_str(self) -> &'static str {
        match self {
            NavState::Closed => "false",
            NavState::Open => "true",
        }
    }
}

/// Apply the enumerated state to the presentation markers.
pub fn apply_nav_state(state: NavState, menu: &mut NavMenu, toggle: &mut NavToggle) {
    if state.is_open() {
        menu.classes_mut().insert(ACTIVE_CLASS);
    } else {
        menu.classes_mut().remove(ACTIVE_CLASS);
    }
    toggle.set_aria_expanded(state.as_aria_str());
}
