//! The contact form interceptor.

use brochure_types::{ContactSubmission, FieldId, Page};

/// Which of the two panels is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelShown {
    #[default]
    Form,
    Success,
}

/// Editable values for the fields the form actually carries.
#[derive(Debug, Default)]
struct ContactDraft {
    values: Vec<(FieldId, String)>,
}

impl ContactDraft {
    fn for_fields(fields: &[FieldId]) -> Self {
        Self {
            values: fields.iter().map(|&f| (f, String::new())).collect(),
        }
    }

    fn value(&self, id: FieldId) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == id)
            .map(|(_, v)| v.as_str())
    }

    fn value_mut(&mut self, id: FieldId) -> Option<&mut String> {
        self.values
            .iter_mut()
            .find(|(f, _)| *f == id)
            .map(|(_, v)| v)
    }

    fn clear(&mut self) {
        for (_, value) in &mut self.values {
            value.clear();
        }
    }

    /// Capture all four named fields. A field the form does not carry
    /// yields an empty string.
    fn capture(&self) -> ContactSubmission {
        let value = |id| self.value(id).unwrap_or_default().to_string();
        ContactSubmission {
            name: value(FieldId::Name),
            email: value(FieldId::Email),
            subject: value(FieldId::Subject),
            message: value(FieldId::Message),
        }
    }
}

/// Intercepts form submission: captures the record, swaps the panels, and
/// clears the draft. Never rejects input.
#[derive(Debug)]
pub struct FormInterceptor {
    fields: Vec<FieldId>,
    draft: ContactDraft,
    shown: PanelShown,
}

impl FormInterceptor {
    /// Bind against the page. Requires both the form and the success
    /// panel; if either is absent, no interceptor is constructed.
    #[must_use]
    pub fn bind(page: &Page) -> Option<Self> {
        match (page.contact_form(), page.success_panel()) {
            (Some(form), Some(_)) => Some(Self {
                fields: form.fields().to_vec(),
                draft: ContactDraft::for_fields(form.fields()),
                shown: PanelShown::Form,
            }),
            _ => {
                tracing::debug!("contact form or success panel absent, interceptor not bound");
                None
            }
        }
    }

    #[must_use]
    pub fn shown(&self) -> PanelShown {
        self.shown
    }

    /// Fields the form carries, in form order.
    #[must_use]
    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    /// Current draft value of a field. Empty string for a field the form
    /// does not carry.
    #[must_use]
    pub fn value(&self, id: FieldId) -> &str {
        self.draft.value(id).unwrap_or_default()
    }

    /// Append a typed character to a field. Input into a field the form
    /// does not carry is dropped.
    pub fn input(&mut self, id: FieldId, ch: char) {
        if self.shown != PanelShown::Form {
            return;
        }
        if let Some(value) = self.draft.value_mut(id) {
            value.push(ch);
        }
    }

    /// Delete the last character of a field.
    pub fn backspace(&mut self, id: FieldId) {
        if self.shown != PanelShown::Form {
            return;
        }
        if let Some(value) = self.draft.value_mut(id) {
            value.pop();
        }
    }

    /// Handle submission: capture the record, hide the form, reveal the
    /// success panel, clear the fields. The default (network) action is
    /// already suppressed by construction; nothing is transmitted.
    pub fn submit(&mut self) -> ContactSubmission {
        let submission = self.draft.capture();
        self.shown = PanelShown::Success;
        self.draft.clear();
        submission
    }
}
