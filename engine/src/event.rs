//! Semantic page events.
//!
//! The host shell translates raw terminal input into these before handing
//! them to [`crate::App::dispatch`]. One variant per UI event keeps the
//! controllers testable without a live terminal.

use brochure_types::{FieldId, LinkTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The nav toggle control was activated.
    ToggleActivated,
    /// A click landed outside both the toggle and the menu.
    OutsideClick,
    /// A link inside the nav menu was activated.
    MenuLinkActivated(LinkTarget),
    /// An anchor in the page body was activated.
    AnchorActivated(LinkTarget),
    /// The contact form was submitted.
    SubmitRequested,
    /// A character was typed into a form field.
    FieldInput(FieldId, char),
    /// Backspace in a form field.
    FieldBackspace(FieldId),
}
