//! Shared fixtures for the behavior suite.

#![allow(dead_code)]

use brochure_engine::{App, BrochureConfig, parse_page};
use brochure_types::{Page, SectionId};

pub const FULL_PAGE: &str = r##"
    title = "SuperByte Brilliance"

    [nav.toggle]
    label = "Menu"

    [[nav.menu.links]]
    label = "Home"
    href = "#hero"

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
    fields = ["name", "email", "subject", "message"]

    [success]
    message = "Thank you! Your message has been sent."
"##;

pub fn full_page() -> Page {
    parse_page(FULL_PAGE).expect("fixture page is valid")
}

pub fn page_without_nav() -> Page {
    parse_page(
        r#"
        [[section]]
        id = "hero"

        [form]

        [success]
        "#,
    )
    .expect("fixture page is valid")
}

pub fn page_without_success_panel() -> Page {
    parse_page(
        r#"
        [[section]]
        id = "hero"

        [form]
        "#,
    )
    .expect("fixture page is valid")
}

pub fn app(page: Page) -> App {
    App::start(page, &BrochureConfig::default())
}

/// An app whose renderer has already reported scroll metrics.
pub fn app_with_metrics(page: Page) -> App {
    let mut app = app(page);
    let offsets = vec![
        (SectionId::new("hero").expect("valid id"), 0),
        (SectionId::new("pricing").expect("valid id"), 40),
    ];
    app.set_scroll_metrics(offsets, 120, 20);
    app
}
