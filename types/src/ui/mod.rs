//! UI state types for the terminal layer.
//!
//! Pure data types with no IO and no ratatui dependency. Used by both the
//! engine (state ownership) and tui (rendering/input).

mod animation;
mod nav;
mod scroll;
mod view_state;

pub use animation::AnimPhase;
pub use nav::{ACTIVE_CLASS, NavState, apply_nav_state};
pub use scroll::ScrollEffect;
pub use view_state::{UiOptions, ViewState};
