//! The page model consumed by the controllers.
//!
//! Raw deserialization structs (with `Option` fields and loose strings)
//! stay private here. The public types are resolved at the parse boundary
//! via `#[serde(try_from)]`, so holding a [`Page`] is the proof that its
//! structure is valid: section ids are non-empty and unique, hrefs are
//! parsed, field names are known.

use serde::Deserialize;
use thiserror::Error;

use crate::contact::{FieldId, UnknownFieldError};
use crate::link::LinkTarget;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("section id must not be empty")]
    EmptySectionId,
    #[error("duplicate section id {0:?}")]
    DuplicateSectionId(String),
    #[error("link {label:?} has an empty href")]
    EmptyHref { label: String },
    #[error("nav toggle label must not be empty")]
    EmptyToggleLabel,
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
    #[error("form lists field {0:?} twice")]
    DuplicateField(FieldId),
}

// ============================================================================
// Presentation primitives
// ============================================================================

/// An ordered set of presentational class markers on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Add a class. No-op if already present.
    pub fn insert(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    /// Remove a class. No-op if absent.
    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }
}

// ============================================================================
// Sections
// ============================================================================

/// A validated, non-empty section identifier.
///
/// Fragments in links resolve against these ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Result<Self, PageError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(PageError::EmptySectionId)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SectionId {
    type Error = PageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[derive(Deserialize)]
struct RawSection {
    id: SectionId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    links: Vec<RawLink>,
}

/// One content section of the page, addressable by fragment.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawSection")]
pub struct Section {
    id: SectionId,
    title: String,
    body: String,
    links: Vec<NavLink>,
}

impl TryFrom<RawSection> for Section {
    type Error = PageError;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            title: raw.title,
            body: raw.body,
            links: resolve_links(raw.links)?,
        })
    }
}

impl Section {
    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

// ============================================================================
// Navigation elements
// ============================================================================

#[derive(Deserialize)]
struct RawLink {
    label: String,
    href: String,
}

/// An anchor: a label plus its parsed target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawLink")]
pub struct NavLink {
    label: String,
    target: LinkTarget,
}

impl TryFrom<RawLink> for NavLink {
    type Error = PageError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        if raw.href.trim().is_empty() {
            return Err(PageError::EmptyHref { label: raw.label });
        }
        Ok(Self {
            label: raw.label,
            target: LinkTarget::parse(&raw.href),
        })
    }
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: &str) -> Result<Self, PageError> {
        let label = label.into();
        if href.trim().is_empty() {
            return Err(PageError::EmptyHref { label });
        }
        Ok(Self {
            label,
            target: LinkTarget::parse(href),
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn target(&self) -> &LinkTarget {
        &self.target
    }
}

fn resolve_links(raw: Vec<RawLink>) -> Result<Vec<NavLink>, PageError> {
    raw.into_iter().map(NavLink::try_from).collect()
}

#[derive(Deserialize)]
struct RawToggle {
    label: String,
}

/// The control that opens and closes the nav menu.
///
/// Carries the expanded-state attribute that mirrors the menu state; the
/// attribute is a string on purpose, matching the accessibility contract
/// ("true"/"false"), and is written only by the render application step.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawToggle")]
pub struct NavToggle {
    label: String,
    aria_expanded: String,
}

impl TryFrom<RawToggle> for NavToggle {
    type Error = PageError;

    fn try_from(raw: RawToggle) -> Result<Self, Self::Error> {
        Self::new(raw.label)
    }
}

impl NavToggle {
    pub fn new(label: impl Into<String>) -> Result<Self, PageError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(PageError::EmptyToggleLabel);
        }
        Ok(Self {
            label,
            aria_expanded: "false".to_string(),
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn aria_expanded(&self) -> &str {
        &self.aria_expanded
    }

    pub fn set_aria_expanded(&mut self, value: &str) {
        value.clone_into(&mut self.aria_expanded);
    }
}

#[derive(Deserialize)]
struct RawMenu {
    #[serde(default)]
    links: Vec<RawLink>,
}

/// The collapsible menu container.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawMenu")]
pub struct NavMenu {
    classes: ClassList,
    links: Vec<NavLink>,
}

impl TryFrom<RawMenu> for NavMenu {
    type Error = PageError;

    fn try_from(raw: RawMenu) -> Result<Self, Self::Error> {
        Ok(Self::new(resolve_links(raw.links)?))
    }
}

impl NavMenu {
    #[must_use]
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            classes: ClassList::default(),
            links,
        }
    }

    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

// ============================================================================
// Contact form elements
// ============================================================================

#[derive(Deserialize)]
struct RawForm {
    fields: Option<Vec<String>>,
}

/// The contact form definition: which named fields the page carries.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawForm")]
pub struct ContactForm {
    fields: Vec<FieldId>,
}

impl TryFrom<RawForm> for ContactForm {
    type Error = PageError;

    fn try_from(raw: RawForm) -> Result<Self, Self::Error> {
        match raw.fields {
            None => Ok(Self::with_all_fields()),
            Some(names) => {
                let mut fields = Vec::with_capacity(names.len());
                for name in &names {
                    let field = FieldId::parse(name)?;
                    if fields.contains(&field) {
                        return Err(PageError::DuplicateField(field));
                    }
                    fields.push(field);
                }
                Ok(Self { fields })
            }
        }
    }
}

impl ContactForm {
    /// A form carrying all four named fields.
    #[must_use]
    pub fn with_all_fields() -> Self {
        Self {
            fields: FieldId::all().to_vec(),
        }
    }

    #[must_use]
    pub fn with_fields(fields: Vec<FieldId>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    #[must_use]
    pub fn has_field(&self, id: FieldId) -> bool {
        self.fields.contains(&id)
    }
}

fn default_success_message() -> String {
    "Thank you! Your message has been sent.".to_string()
}

/// The panel revealed after a successful submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessPanel {
    #[serde(default = "default_success_message")]
    message: String,
}

impl SuccessPanel {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for SuccessPanel {
    fn default() -> Self {
        Self {
            message: default_success_message(),
        }
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Deserialize)]
struct RawNav {
    toggle: Option<NavToggle>,
    menu: Option<NavMenu>,
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    title: String,
    nav: Option<RawNav>,
    #[serde(default, rename = "section")]
    sections: Vec<Section>,
    form: Option<ContactForm>,
    success: Option<SuccessPanel>,
}

/// The whole page as loaded.
///
/// Each interactive element is independently optional; the controllers
/// bind only when the elements they need are all present.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    title: String,
    nav_toggle: Option<NavToggle>,
    nav_menu: Option<NavMenu>,
    sections: Vec<Section>,
    contact_form: Option<ContactForm>,
    success_panel: Option<SuccessPanel>,
}

impl TryFrom<RawPage> for Page {
    type Error = PageError;

    fn try_from(raw: RawPage) -> Result<Self, Self::Error> {
        let (nav_toggle, nav_menu) = match raw.nav {
            Some(nav) => (nav.toggle, nav.menu),
            None => (None, None),
        };
        let page = Self {
            title: raw.title,
            nav_toggle,
            nav_menu,
            sections: raw.sections,
            contact_form: raw.form,
            success_panel: raw.success,
        };
        page.check_section_ids()?;
        Ok(page)
    }
}

impl Page {
    /// Assemble a page directly. Fails on duplicate section ids.
    pub fn new(
        title: impl Into<String>,
        nav_toggle: Option<NavToggle>,
        nav_menu: Option<NavMenu>,
        sections: Vec<Section>,
        contact_form: Option<ContactForm>,
        success_panel: Option<SuccessPanel>,
    ) -> Result<Self, PageError> {
        let page = Self {
            title: title.into(),
            nav_toggle,
            nav_menu,
            sections,
            contact_form,
            success_panel,
        };
        page.check_section_ids()?;
        Ok(page)
    }

    fn check_section_ids(&self) -> Result<(), PageError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let id = section.id().as_str();
            if seen.contains(&id) {
                return Err(PageError::DuplicateSectionId(id.to_string()));
            }
            seen.push(id);
        }
        Ok(())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn nav_toggle(&self) -> Option<&NavToggle> {
        self.nav_toggle.as_ref()
    }

    #[must_use]
    pub fn nav_menu(&self) -> Option<&NavMenu> {
        self.nav_menu.as_ref()
    }

    /// Mutable access to both nav elements at once, for the render
    /// application step. `None` unless both are present.
    pub fn nav_elements_mut(&mut self) -> Option<(&mut NavMenu, &mut NavToggle)> {
        match (&mut self.nav_menu, &mut self.nav_toggle) {
            (Some(menu), Some(toggle)) => Some((menu, toggle)),
            _ => None,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Resolve a fragment name to its section.
    #[must_use]
    pub fn section(&self, fragment: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id().as_str() == fragment)
    }

    #[must_use]
    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.contact_form.as_ref()
    }

    #[must_use]
    pub fn success_panel(&self) -> Option<&SuccessPanel> {
        self.success_panel.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassList, NavLink, NavToggle, Page, PageError, Section, SectionId};

    fn section(id: &str) -> Section {
        Section {
            id: SectionId::new(id).unwrap(),
            title: id.to_uppercase(),
            body: String::new(),
            links: Vec::new(),
        }
    }

    #[test]
    fn class_list_insert_is_idempotent() {
        let mut classes = ClassList::default();
        classes.insert("active");
        classes.insert("active");
        assert!(classes.contains("active"));
        classes.remove("active");
        assert!(!classes.contains("active"));
        classes.remove("active");
    }

    #[test]
    fn section_id_rejects_empty() {
        assert!(SectionId::new("").is_err());
        assert!(SectionId::new("  ").is_err());
        assert!(SectionId::new("pricing").is_ok());
    }

    #[test]
    fn nav_link_rejects_empty_href() {
        assert!(NavLink::new("Pricing", "").is_err());
        assert!(NavLink::new("Pricing", "#pricing").is_ok());
    }

    #[test]
    fn toggle_starts_collapsed() {
        let toggle = NavToggle::new("Menu").unwrap();
        assert_eq!(toggle.aria_expanded(), "false");
    }

    #[test]
    fn page_rejects_duplicate_section_ids() {
        let result = Page::new(
            "t",
            None,
            None,
            vec![section("hero"), section("hero")],
            None,
            None,
        );
        assert!(matches!(result, Err(PageError::DuplicateSectionId(id)) if id == "hero"));
    }

    #[test]
    fn page_resolves_sections_by_fragment() {
        let page = Page::new(
            "t",
            None,
            None,
            vec![section("hero"), section("pricing")],
            None,
            None,
        )
        .unwrap();
        assert_eq!(page.section("pricing").unwrap().id().as_str(), "pricing");
        assert!(page.section("missing").is_none());
    }
}
