//! Terminal rendering for Brochure using ratatui.

mod input;
mod layout;
mod render;
mod theme;

pub use input::handle_events;
pub use layout::{Hit, LayoutMap};
pub use render::draw;
pub use theme::{Glyphs, Palette, glyphs, palette};
