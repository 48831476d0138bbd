//! Input handling for the Brochure TUI.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tracing::debug;

use brochure_engine::{App, FocusTarget, PageEvent};

use crate::layout::{Hit, LayoutMap};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Wait up to `wait` for input, then drain the queue, translating terminal
/// events into page events. Returns `true` when the user asked to quit.
pub fn handle_events(app: &mut App, layout: &LayoutMap, wait: Duration) -> Result<bool> {
    if !event::poll(wait)? {
        return Ok(false);
    }

    let mut handled = 0;
    loop {
        match event::read()? {
            Event::Key(key) => {
                if handle_key(app, key) {
                    return Ok(true);
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, layout, mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            _ => {}
        }
        handled += 1;
        if handled >= MAX_EVENTS_PER_FRAME || !event::poll(Duration::ZERO)? {
            return Ok(false);
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        // Keyboard equivalent of a click outside the menu.
        KeyCode::Esc => app.dispatch(PageEvent::OutsideClick),
        KeyCode::Enter => match app.focus() {
            FocusTarget::Field(_) | FocusTarget::Submit => {
                app.dispatch(PageEvent::SubmitRequested);
            }
            FocusTarget::None => {}
        },
        KeyCode::Backspace => {
            if let FocusTarget::Field(field) = app.focus() {
                app.dispatch(PageEvent::FieldBackspace(field));
            }
        }
        KeyCode::Up => app.scroll_lines(-1),
        KeyCode::Down => app.scroll_lines(1),
        KeyCode::PageUp => app.scroll_lines(-10),
        KeyCode::PageDown => app.scroll_lines(10),
        KeyCode::Char(ch) => {
            if let FocusTarget::Field(field) = app.focus() {
                app.dispatch(PageEvent::FieldInput(field, ch));
            } else {
                return handle_shortcut(app, ch);
            }
        }
        _ => {}
    }
    false
}

/// Shortcuts active while no field is focused.
fn handle_shortcut(app: &mut App, ch: char) -> bool {
    match ch {
        'q' => return true,
        'm' => app.dispatch(PageEvent::ToggleActivated),
        // Digits activate menu links while the menu is open.
        '1'..='9' => {
            if app.menu_open() {
                let index = ch as usize - '1' as usize;
                let target = app
                    .page()
                    .nav_menu()
                    .and_then(|menu| menu.links().get(index))
                    .map(|link| link.target().clone());
                if let Some(target) = target {
                    app.dispatch(PageEvent::MenuLinkActivated(target));
                }
            }
        }
        _ => {}
    }
    false
}

fn handle_mouse(app: &mut App, layout: &LayoutMap, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, layout.hit(mouse.column, mouse.row));
        }
        MouseEventKind::ScrollUp => app.scroll_lines(-3),
        MouseEventKind::ScrollDown => app.scroll_lines(3),
        _ => {}
    }
}

fn handle_click(app: &mut App, hit: Hit) {
    // Anything outside the toggle and the menu counts as an outside click
    // for the navigation controller, before its own action runs.
    match hit {
        Hit::Toggle => app.dispatch(PageEvent::ToggleActivated),
        Hit::Menu => {}
        Hit::MenuLink(target) => app.dispatch(PageEvent::MenuLinkActivated(target)),
        Hit::Anchor(target) => {
            app.dispatch(PageEvent::OutsideClick);
            app.dispatch(PageEvent::AnchorActivated(target));
        }
        Hit::Field(field) => {
            app.dispatch(PageEvent::OutsideClick);
            app.set_focus(FocusTarget::Field(field));
        }
        Hit::Submit => {
            app.dispatch(PageEvent::OutsideClick);
            app.dispatch(PageEvent::SubmitRequested);
        }
        Hit::Outside => app.dispatch(PageEvent::OutsideClick),
    }
}

#[cfg(test)]
mod tests {
    use super::handle_click;
    use crate::layout::Hit;
    use brochure_engine::{App, BrochureConfig, FocusTarget, PageEvent, parse_page};
    use brochure_types::{FieldId, LinkTarget};

    fn app() -> App {
        let page = parse_page(
            r##"
            [nav.toggle]
            label = "Menu"

            [[nav.menu.links]]
            label = "Pricing"
            href = "#pricing"

            [[section]]
            id = "pricing"

            [form]

            [success]
            "##,
        )
        .unwrap();
        App::start(page, &BrochureConfig::default())
    }

    #[test]
    fn click_on_toggle_opens_menu() {
        let mut app = app();
        handle_click(&mut app, Hit::Toggle);
        assert!(app.menu_open());
        handle_click(&mut app, Hit::Toggle);
        assert!(!app.menu_open());
    }

    #[test]
    fn outside_click_closes_menu() {
        let mut app = app();
        handle_click(&mut app, Hit::Toggle);
        handle_click(&mut app, Hit::Outside);
        assert!(!app.menu_open());
    }

    #[test]
    fn click_inside_menu_container_keeps_it_open() {
        let mut app = app();
        handle_click(&mut app, Hit::Toggle);
        handle_click(&mut app, Hit::Menu);
        assert!(app.menu_open());
    }

    #[test]
    fn menu_link_click_closes_menu() {
        let mut app = app();
        handle_click(&mut app, Hit::Toggle);
        handle_click(
            &mut app,
            Hit::MenuLink(LinkTarget::Fragment("pricing".to_string())),
        );
        assert!(!app.menu_open());
    }

    #[test]
    fn field_click_focuses_and_closes_menu() {
        let mut app = app();
        handle_click(&mut app, Hit::Toggle);
        handle_click(&mut app, Hit::Field(FieldId::Email));
        assert!(!app.menu_open());
        assert_eq!(app.focus(), FocusTarget::Field(FieldId::Email));
    }

    #[test]
    fn submit_click_submits_the_form() {
        let mut app = app();
        app.dispatch(PageEvent::FieldInput(FieldId::Name, 'A'));
        handle_click(&mut app, Hit::Submit);
        assert_eq!(
            app.form().unwrap().shown(),
            brochure_engine::PanelShown::Success
        );
    }
}
