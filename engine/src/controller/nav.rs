//! The navigation controller.

use brochure_types::Page;
use brochure_types::ui::NavState;

/// Owns the menu open/closed state.
///
/// Transitions are pure; applying the resulting state to the menu's class
/// list and the toggle's attribute is the caller's render application step
/// ([`brochure_types::ui::apply_nav_state`]).
#[derive(Debug)]
pub struct NavController {
    state: NavState,
}

impl NavController {
    /// Bind against the page. Requires both the toggle and the menu; if
    /// either is absent, no controller is constructed.
    #[must_use]
    pub fn bind(page: &Page) -> Option<Self> {
        if page.nav_toggle().is_some() && page.nav_menu().is_some() {
            Some(Self {
                state: NavState::default(),
            })
        } else {
            tracing::debug!("nav toggle or menu absent, navigation controller not bound");
            None
        }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Toggle activation flips the state.
    pub fn on_toggle(&mut self) -> NavState {
        self.state = self.state.toggled();
        self.state
    }

    /// A click outside both the toggle and the menu forces closed.
    pub fn on_outside_click(&mut self) -> NavState {
        self.state = NavState::Closed;
        self.state
    }

    /// Activating a link inside the menu forces closed, whatever the
    /// prior state.
    pub fn on_menu_link(&mut self) -> NavState {
        self.state = NavState::Closed;
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::NavController;
    use brochure_types::ui::NavState;
    use brochure_types::{NavLink, NavMenu, NavToggle, Page};

    fn page_with_nav() -> Page {
        Page::new(
            "t",
            Some(NavToggle::new("Menu").unwrap()),
            Some(NavMenu::new(vec![
                NavLink::new("Pricing", "#pricing").unwrap(),
            ])),
            Vec::new(),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn binds_only_when_both_elements_present() {
        assert!(NavController::bind(&page_with_nav()).is_some());

        let no_toggle = Page::new(
            "t",
            None,
            Some(NavMenu::new(Vec::new())),
            Vec::new(),
            None,
            None,
        )
        .unwrap();
        assert!(NavController::bind(&no_toggle).is_none());

        let no_menu = Page::new(
            "t",
            Some(NavToggle::new("Menu").unwrap()),
            None,
            Vec::new(),
            None,
            None,
        )
        .unwrap();
        assert!(NavController::bind(&no_menu).is_none());
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let mut nav = NavController::bind(&page_with_nav()).unwrap();
        assert_eq!(nav.state(), NavState::Closed);
        assert_eq!(nav.on_toggle(), NavState::Open);
        assert_eq!(nav.on_toggle(), NavState::Closed);
    }

    #[test]
    fn outside_click_forces_closed() {
        let mut nav = NavController::bind(&page_with_nav()).unwrap();
        nav.on_toggle();
        assert_eq!(nav.on_outside_click(), NavState::Closed);
        // Already closed stays closed.
        assert_eq!(nav.on_outside_click(), NavState::Closed);
    }

    #[test]
    fn menu_link_always_leaves_closed() {
        let mut nav = NavController::bind(&page_with_nav()).unwrap();
        assert_eq!(nav.on_menu_link(), NavState::Closed);
        nav.on_toggle();
        assert_eq!(nav.on_menu_link(), NavState::Closed);
    }
}
