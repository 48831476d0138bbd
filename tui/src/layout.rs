//! Hit-testing map for mouse input.
//!
//! The renderer records where the interactive elements landed each frame;
//! the input layer resolves click coordinates against the previous frame's
//! map. One frame of staleness is acceptable at the render cadence.

use ratatui::layout::Rect;

use brochure_types::{FieldId, LinkTarget};

/// Screen regions of the interactive elements, rebuilt every frame.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    pub toggle: Option<Rect>,
    pub menu: Option<Rect>,
    pub menu_links: Vec<(Rect, LinkTarget)>,
    pub anchors: Vec<(Rect, LinkTarget)>,
    pub fields: Vec<(Rect, FieldId)>,
    pub submit: Option<Rect>,
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Toggle,
    /// Inside the menu container but not on a link.
    Menu,
    MenuLink(LinkTarget),
    Anchor(LinkTarget),
    Field(FieldId),
    Submit,
    /// Outside every tracked element.
    Outside,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

impl LayoutMap {
    /// Resolve a click position. Menu links win over the menu container;
    /// the container wins over everything underneath it.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Hit {
        for (rect, target) in &self.menu_links {
            if contains(*rect, x, y) {
                return Hit::MenuLink(target.clone());
            }
        }
        if self.menu.is_some_and(|rect| contains(rect, x, y)) {
            return Hit::Menu;
        }
        if self.toggle.is_some_and(|rect| contains(rect, x, y)) {
            return Hit::Toggle;
        }
        for (rect, field) in &self.fields {
            if contains(*rect, x, y) {
                return Hit::Field(*field);
            }
        }
        if self.submit.is_some_and(|rect| contains(rect, x, y)) {
            return Hit::Submit;
        }
        for (rect, target) in &self.anchors {
            if contains(*rect, x, y) {
                return Hit::Anchor(target.clone());
            }
        }
        Hit::Outside
    }
}
