//! Built-in demo page, used when no page definition is given.

const DEMO_PAGE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/demo_page.toml"));

/// The compiled-in demo page definition.
pub fn demo_page() -> &'static str {
    DEMO_PAGE
}
