//! Application state and event dispatch.

use std::time::Duration;

use brochure_types::ui::{NavState, ViewState, apply_nav_state};
use brochure_types::{FieldId, LinkTarget, Page, SectionId};

use crate::config::BrochureConfig;
use crate::controller::{FormInterceptor, NavController, PanelShown, RouteOutcome, ScrollRouter};
use crate::event::PageEvent;
use crate::validation::{ValidationResult, validate_email};

/// Which control keyboard input is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    None,
    Field(FieldId),
    Submit,
}

/// Owns the page and the three controllers.
///
/// `App::start` is the application-start function: it performs the element
/// lookups over the loaded page and binds each initializer only when the
/// elements it needs are present. Everything after that is event dispatch.
pub struct App {
    page: Page,
    nav: Option<NavController>,
    form: Option<FormInterceptor>,
    router: ScrollRouter,
    view: ViewState,
    focus: FocusTarget,
    section_offsets: Vec<(SectionId, u16)>,
    pending_scroll: Option<SectionId>,
    scroll_duration: Duration,
}

impl App {
    /// Bind the three initializers against the page and build the app.
    #[must_use]
    pub fn start(page: Page, config: &BrochureConfig) -> Self {
        let nav = NavController::bind(&page);
        let form = FormInterceptor::bind(&page);
        let router = ScrollRouter::bind(&page);

        let mut app = Self {
            view: ViewState::new(config.ui_options()),
            scroll_duration: config.scroll_duration(),
            page,
            nav,
            form,
            router,
            focus: FocusTarget::None,
            section_offsets: Vec::new(),
            pending_scroll: None,
        };
        // Establish the presentation mirror before the first event.
        if let Some(state) = app.nav_state() {
            Self::apply_nav(&mut app.page, state);
        }
        app
    }

    /// Dispatch one semantic page event.
    pub fn dispatch(&mut self, event: PageEvent) {
        match event {
            PageEvent::ToggleActivated => {
                if let Some(nav) = &mut self.nav {
                    let state = nav.on_toggle();
                    Self::apply_nav(&mut self.page, state);
                }
            }
            PageEvent::OutsideClick => {
                if let Some(nav) = &mut self.nav {
                    let state = nav.on_outside_click();
                    Self::apply_nav(&mut self.page, state);
                }
            }
            PageEvent::MenuLinkActivated(target) => {
                if let Some(nav) = &mut self.nav {
                    let state = nav.on_menu_link();
                    Self::apply_nav(&mut self.page, state);
                }
                self.route_anchor(&target);
            }
            PageEvent::AnchorActivated(target) => self.route_anchor(&target),
            PageEvent::SubmitRequested => self.submit(),
            PageEvent::FieldInput(field, ch) => {
                if let Some(form) = &mut self.form {
                    form.input(field, ch);
                }
            }
            PageEvent::FieldBackspace(field) => {
                if let Some(form) = &mut self.form {
                    form.backspace(field);
                }
            }
        }
    }

    /// Advance animations and any deferred scroll by one frame.
    pub fn tick(&mut self, delta: Duration) {
        self.view.advance(delta);
        if let Some(id) = self.pending_scroll.take() {
            self.request_scroll(id);
        }
    }

    fn apply_nav(page: &mut Page, state: NavState) {
        if let Some((menu, toggle)) = page.nav_elements_mut() {
            apply_nav_state(state, menu, toggle);
        }
    }

    fn route_anchor(&mut self, target: &LinkTarget) {
        match self.router.route(target) {
            RouteOutcome::Ignored => {
                tracing::trace!("bare fragment activation ignored");
            }
            RouteOutcome::ScrollTo(id) => self.request_scroll(id),
            RouteOutcome::NotIntercepted => {
                tracing::debug!(href = %target, "not intercepted, default navigation proceeds");
            }
        }
    }

    fn request_scroll(&mut self, id: SectionId) {
        match self.section_offset(&id) {
            Some(offset) => {
                tracing::debug!(section = %id, offset, "scrolling to section");
                self.view.scroll_to(offset, self.scroll_duration);
            }
            // Offsets are produced by the renderer; before the first frame
            // the scroll is parked until metrics arrive.
            None => self.pending_scroll = Some(id),
        }
    }

    fn submit(&mut self) {
        let Some(form) = &mut self.form else {
            return;
        };
        let submission = form.submit();
        if let ValidationResult::Invalid(reason) = validate_email(&submission.email) {
            tracing::warn!(%reason, "submission accepted with invalid email");
        }
        let record = serde_json::to_string(&submission)
            .unwrap_or_else(|_| format!("{submission:?}"));
        tracing::info!(%record, "contact form submitted");
        self.focus = FocusTarget::None;
    }

    // ========================================================================
    // Scroll metrics (fed back by the renderer)
    // ========================================================================

    /// Record the rendered line offset of each section plus the content and
    /// viewport heights. Resolves any scroll that was parked waiting for
    /// metrics.
    pub fn set_scroll_metrics(
        &mut self,
        section_offsets: Vec<(SectionId, u16)>,
        content_height: u16,
        viewport_height: u16,
    ) {
        self.section_offsets = section_offsets;
        self.view.set_metrics(content_height, viewport_height);
        if let Some(id) = self.pending_scroll.take() {
            self.request_scroll(id);
        }
    }

    #[must_use]
    pub fn section_offset(&self, id: &SectionId) -> Option<u16> {
        self.section_offsets
            .iter()
            .find(|(s, _)| s == id)
            .map(|(_, offset)| *offset)
    }

    /// Manual scroll by whole lines (wheel or arrow keys).
    pub fn scroll_lines(&mut self, lines: i32) {
        self.view.scroll_by(lines);
    }

    // ========================================================================
    // Focus
    // ========================================================================

    #[must_use]
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    fn focus_ring(&self) -> Vec<FocusTarget> {
        let mut ring = vec![FocusTarget::None];
        if let Some(form) = &self.form
            && form.shown() == PanelShown::Form
        {
            ring.extend(form.fields().iter().map(|&f| FocusTarget::Field(f)));
            ring.push(FocusTarget::Submit);
        }
        ring
    }

    /// Point keyboard focus at a control (mouse click on a field). Targets
    /// that are not currently focusable collapse to `None`.
    pub fn set_focus(&mut self, target: FocusTarget) {
        if self.focus_ring().contains(&target) {
            self.focus = target;
        } else {
            self.focus = FocusTarget::None;
        }
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|t| *t == self.focus).unwrap_or(0);
        self.focus = ring[(at + 1) % ring.len()];
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let at = ring.iter().position(|t| *t == self.focus).unwrap_or(0);
        self.focus = ring[(at + ring.len() - 1) % ring.len()];
    }

    // ========================================================================
    // Accessors for rendering and input
    // ========================================================================

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Menu state, if the navigation controller is bound.
    #[must_use]
    pub fn nav_state(&self) -> Option<NavState> {
        self.nav.as_ref().map(NavController::state)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.nav_state().is_some_and(NavState::is_open)
    }

    /// The form interceptor, if bound.
    #[must_use]
    pub fn form(&self) -> Option<&FormInterceptor> {
        self.form.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::{App, FocusTarget};
    use crate::config::BrochureConfig;
    use crate::event::PageEvent;
    use brochure_types::ui::{ACTIVE_CLASS, NavState};
    use brochure_types::{FieldId, LinkTarget, SectionId};
    use std::time::Duration;

    const PAGE: &str = r##"
        title = "SuperByte Brilliance"

        [nav.toggle]
        label = "Menu"

        [[nav.menu.links]]
        label = "Pricing"
        href = "#pricing"

        [[section]]
        id = "hero"
        title = "Welcome"
        body = "Ship brilliance."

        [[section]]
        id = "pricing"
        title = "Pricing"
        body = "Free forever."

        [form]

        [success]
    "##;

    fn app() -> App {
        let page = crate::site::parse_page(PAGE).unwrap();
        App::start(page, &BrochureConfig::default())
    }

    fn app_with_metrics() -> App {
        let mut app = app();
        app.set_scroll_metrics(
            vec![
                (SectionId::new("hero").unwrap(), 0),
                (SectionId::new("pricing").unwrap(), 40),
            ],
            120,
            20,
        );
        app
    }

    fn type_str(app: &mut App, field: FieldId, text: &str) {
        for ch in text.chars() {
            app.dispatch(PageEvent::FieldInput(field, ch));
        }
    }

    #[test]
    fn toggle_flips_state_and_presentation() {
        let mut app = app();
        assert_eq!(app.nav_state(), Some(NavState::Closed));
        assert_eq!(app.page().nav_toggle().unwrap().aria_expanded(), "false");

        app.dispatch(PageEvent::ToggleActivated);
        assert_eq!(app.nav_state(), Some(NavState::Open));
        assert!(app.page().nav_menu().unwrap().classes().contains(ACTIVE_CLASS));
        assert_eq!(app.page().nav_toggle().unwrap().aria_expanded(), "true");

        app.dispatch(PageEvent::ToggleActivated);
        assert_eq!(app.nav_state(), Some(NavState::Closed));
        assert!(!app.page().nav_menu().unwrap().classes().contains(ACTIVE_CLASS));
        assert_eq!(app.page().nav_toggle().unwrap().aria_expanded(), "false");
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut app = app();
        app.dispatch(PageEvent::ToggleActivated);
        app.dispatch(PageEvent::OutsideClick);
        assert_eq!(app.nav_state(), Some(NavState::Closed));
        assert_eq!(app.page().nav_toggle().unwrap().aria_expanded(), "false");
    }

    #[test]
    fn menu_link_closes_menu_and_scrolls() {
        let mut app = app_with_metrics();
        app.dispatch(PageEvent::ToggleActivated);
        app.dispatch(PageEvent::MenuLinkActivated(LinkTarget::parse("#pricing")));
        assert_eq!(app.nav_state(), Some(NavState::Closed));
        assert_eq!(app.view().scroll_target(), Some(40));
    }

    #[test]
    fn submit_scenario_captures_and_swaps_panels() {
        let mut app = app();
        type_str(&mut app, FieldId::Name, "Ann");
        type_str(&mut app, FieldId::Email, "a@b.com");
        type_str(&mut app, FieldId::Subject, "Hi");
        type_str(&mut app, FieldId::Message, "Hello");

        app.dispatch(PageEvent::SubmitRequested);

        let form = app.form().unwrap();
        assert_eq!(form.shown(), crate::controller::PanelShown::Success);
        for &field in FieldId::all() {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(app.focus(), FocusTarget::None);
    }

    #[test]
    fn anchor_with_matching_section_glides_to_offset() {
        let mut app = app_with_metrics();
        app.dispatch(PageEvent::AnchorActivated(LinkTarget::parse("#pricing")));
        assert!(app.view().is_scrolling());
        assert_eq!(app.view().scroll_target(), Some(40));
        app.tick(Duration::from_secs(1));
        assert_eq!(app.view().offset(), 40);
    }

    #[test]
    fn bare_hash_issues_no_scroll() {
        let mut app = app_with_metrics();
        app.dispatch(PageEvent::AnchorActivated(LinkTarget::parse("#")));
        assert!(!app.view().is_scrolling());
        assert_eq!(app.view().offset(), 0);
    }

    #[test]
    fn missing_fragment_is_not_intercepted() {
        let mut app = app_with_metrics();
        app.dispatch(PageEvent::AnchorActivated(LinkTarget::parse("#missing")));
        assert!(!app.view().is_scrolling());
        assert_eq!(app.view().offset(), 0);
    }

    #[test]
    fn scroll_requested_before_metrics_is_parked() {
        let mut app = app();
        app.dispatch(PageEvent::AnchorActivated(LinkTarget::parse("#pricing")));
        assert!(!app.view().is_scrolling());

        app.set_scroll_metrics(
            vec![(SectionId::new("pricing").unwrap(), 40)],
            120,
            20,
        );
        assert_eq!(app.view().scroll_target(), Some(40));
    }

    #[test]
    fn reduced_motion_scrolls_in_one_frame() {
        let config = BrochureConfig {
            app: Some(crate::config::AppConfig {
                reduced_motion: true,
                ..crate::config::AppConfig::default()
            }),
        };
        let page = crate::site::parse_page(PAGE).unwrap();
        let mut app = App::start(page, &config);
        app.set_scroll_metrics(vec![(SectionId::new("pricing").unwrap(), 40)], 120, 20);
        app.dispatch(PageEvent::AnchorActivated(LinkTarget::parse("#pricing")));
        assert_eq!(app.view().offset(), 40);
        assert!(!app.view().is_scrolling());
    }

    #[test]
    fn focus_cycles_through_fields_and_submit() {
        let mut app = app();
        assert_eq!(app.focus(), FocusTarget::None);
        app.focus_next();
        assert_eq!(app.focus(), FocusTarget::Field(FieldId::Name));
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focus(), FocusTarget::Submit);
        app.focus_next();
        assert_eq!(app.focus(), FocusTarget::None);
        app.focus_prev();
        assert_eq!(app.focus(), FocusTarget::Submit);
    }

    #[test]
    fn events_without_bound_controllers_are_inert() {
        let page = crate::site::parse_page("[[section]]\nid = \"hero\"\n").unwrap();
        let mut app = App::start(page, &BrochureConfig::default());
        assert_eq!(app.nav_state(), None);
        assert!(app.form().is_none());

        app.dispatch(PageEvent::ToggleActivated);
        app.dispatch(PageEvent::SubmitRequested);
        app.dispatch(PageEvent::FieldInput(FieldId::Name, 'x'));
        app.focus_next();
        assert_eq!(app.focus(), FocusTarget::None);
    }
}
