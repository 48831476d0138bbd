//! The scroll router.

use brochure_types::{LinkTarget, Page, SectionId};

/// What an anchor activation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A bare `#`: explicitly ignored, no interception, no scroll.
    Ignored,
    /// A fragment matching a section: intercept and scroll there.
    ScrollTo(SectionId),
    /// No match (or an external target): the default action proceeds.
    NotIntercepted,
}

/// Resolves anchor activations against the page's sections.
#[derive(Debug)]
pub struct ScrollRouter {
    section_ids: Vec<SectionId>,
}

impl ScrollRouter {
    /// Bind against the page. The router is always constructed; with no
    /// sections it simply never intercepts.
    #[must_use]
    pub fn bind(page: &Page) -> Self {
        Self {
            section_ids: page.sections().iter().map(|s| s.id().clone()).collect(),
        }
    }

    /// Route one anchor activation.
    #[must_use]
    pub fn route(&self, target: &LinkTarget) -> RouteOutcome {
        match target {
            LinkTarget::Bare => RouteOutcome::Ignored,
            LinkTarget::External(_) => RouteOutcome::NotIntercepted,
            LinkTarget::Fragment(fragment) => self
                .section_ids
                .iter()
                .find(|id| id.as_str() == fragment.as_str())
                .cloned()
                .map_or(RouteOutcome::NotIntercepted, RouteOutcome::ScrollTo),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteOutcome, ScrollRouter};
    use brochure_types::{LinkTarget, Page, Section, SectionId};

    fn section(id: &str) -> Section {
        toml::from_str(&format!("id = {id:?}")).unwrap()
    }

    fn page() -> Page {
        Page::new(
            "t",
            None,
            None,
            vec![section("hero"), section("pricing")],
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn fragment_with_matching_section_scrolls() {
        let router = ScrollRouter::bind(&page());
        let outcome = router.route(&LinkTarget::parse("#pricing"));
        assert_eq!(
            outcome,
            RouteOutcome::ScrollTo(SectionId::new("pricing").unwrap())
        );
    }

    #[test]
    fn bare_hash_is_ignored() {
        let router = ScrollRouter::bind(&page());
        assert_eq!(router.route(&LinkTarget::parse("#")), RouteOutcome::Ignored);
    }

    #[test]
    fn missing_fragment_is_not_intercepted() {
        let router = ScrollRouter::bind(&page());
        assert_eq!(
            router.route(&LinkTarget::parse("#missing")),
            RouteOutcome::NotIntercepted
        );
    }

    #[test]
    fn external_targets_are_never_intercepted() {
        let router = ScrollRouter::bind(&page());
        assert_eq!(
            router.route(&LinkTarget::parse("https://example.com")),
            RouteOutcome::NotIntercepted
        );
    }

    #[test]
    fn empty_page_never_intercepts() {
        let empty = Page::new("t", None, None, Vec::new(), None, None).unwrap();
        let router = ScrollRouter::bind(&empty);
        assert_eq!(
            router.route(&LinkTarget::parse("#hero")),
            RouteOutcome::NotIntercepted
        );
    }
}
