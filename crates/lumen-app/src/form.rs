//! Contact Form
//!
//! Field state, required/email validation with inline error classes,
//! and the simulated submission transport with its configurable
//! failure rate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

use lumen_dom::{DomTree, NodeId};

/// Field validation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Debug)]
struct FormField {
    name: String,
    kind: FieldKind,
    required: bool,
    value: String,
    /// The field group carrying the error class
    group: NodeId,
}

impl FormField {
    fn is_valid(&self) -> bool {
        if self.required && self.value.trim().is_empty() {
            return false;
        }
        if self.value.is_empty() {
            return true;
        }
        match self.kind {
            FieldKind::Text => true,
            FieldKind::Email => {
                let Some((local, domain)) = self.value.split_once('@') else {
                    return false;
                };
                !local.is_empty() && domain.contains('.')
            }
        }
    }
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactForm {
    fields: Vec<FormField>,
}

impl ContactForm {
    /// Build field state from the form markup: every `.form-input`
    /// contributes a field, its parent group carries the error class
    pub fn from_markup(tree: &DomTree, form_root: NodeId) -> Self {
        let mut fields = Vec::new();
        for input in tree.query_selector_all(form_root, ".form-input") {
            let Some(name) = tree.attr(input, "name") else {
                continue;
            };
            let kind = match tree.attr(input, "type") {
                Some("email") => FieldKind::Email,
                _ => FieldKind::Text,
            };
            let required = tree.attr(input, "required").is_some();
            let group = tree.get(input).map(|n| n.parent).unwrap_or(NodeId::NONE);
            fields.push(FormField {
                name: name.to_string(),
                kind,
                required,
                value: String::new(),
                group,
            });
        }
        debug!(count = fields.len(), "contact form fields bound");
        Self { fields }
    }

    /// Number of bound fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Set a field value by name
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    /// Read a field value by name
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Validate every field, marking offending groups with the error
    /// class. Returns whether the form may submit.
    pub fn validate(&self, tree: &mut DomTree) -> bool {
        let mut all_valid = true;
        for field in &self.fields {
            if field.is_valid() {
                tree.remove_class(field.group, "error");
            } else {
                tree.add_class(field.group, "error");
                all_valid = false;
            }
        }
        all_valid
    }

    /// Clear values and error classes (after a successful submission)
    pub fn reset(&mut self, tree: &mut DomTree) {
        for field in &mut self.fields {
            field.value.clear();
            tree.remove_class(field.group, "error");
        }
    }
}

/// Simulated submission failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected, please try again")]
    Rejected,
}

/// Simulated transport configuration
#[derive(Debug, Clone, Copy)]
pub struct SubmitOptions {
    /// Probability a submission is rejected
    pub failure_rate: f64,
    /// Simulated round-trip latency
    pub delay_ms: f64,
    /// Fixed rng seed for deterministic tests
    pub seed: Option<u64>,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            failure_rate: 0.1,
            delay_ms: 1500.0,
            seed: None,
        }
    }
}

/// The always-local stand-in for the submission endpoint
#[derive(Debug)]
pub struct SimulatedTransport {
    rng: StdRng,
    failure_rate: f64,
}

impl SimulatedTransport {
    pub fn new(options: &SubmitOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            failure_rate: options.failure_rate,
        }
    }

    /// Decide one submission's outcome
    pub fn roll(&mut self) -> Result<(), SubmitError> {
        if self.rng.random::<f64>() < self.failure_rate {
            Err(SubmitError::Rejected)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_dom::Document;

    fn form_setup() -> (Document, ContactForm, NodeId) {
        let mut doc = Document::new();
        crate::build_markup(&mut doc);
        let form_root = doc.element_by_id("contact-form").unwrap();
        let form = ContactForm::from_markup(doc.tree(), form_root);
        (doc, form, form_root)
    }

    #[test]
    fn test_required_fields_block_submission() {
        let (mut doc, form, form_root) = form_setup();
        assert_eq!(form.field_count(), 3);

        assert!(!form.validate(doc.tree_mut()));
        let groups = doc.tree().query_selector_all(form_root, ".form-group");
        assert!(groups.iter().all(|g| doc.tree().has_class(*g, "error")));
    }

    #[test]
    fn test_email_format() {
        let (mut doc, mut form, _) = form_setup();
        form.set_value("name", "Ada");
        form.set_value("message", "Hello there");

        form.set_value("email", "not-an-email");
        assert!(!form.validate(doc.tree_mut()));

        form.set_value("email", "ada@example.com");
        assert!(form.validate(doc.tree_mut()));
    }

    #[test]
    fn test_validate_clears_stale_errors() {
        let (mut doc, mut form, form_root) = form_setup();
        assert!(!form.validate(doc.tree_mut()));

        form.set_value("name", "Ada");
        form.set_value("email", "ada@example.com");
        form.set_value("message", "Hello");
        assert!(form.validate(doc.tree_mut()));
        let groups = doc.tree().query_selector_all(form_root, ".form-group");
        assert!(groups.iter().all(|g| !doc.tree().has_class(*g, "error")));
    }

    #[test]
    fn test_reset() {
        let (mut doc, mut form, _) = form_setup();
        form.set_value("name", "Ada");
        form.reset(doc.tree_mut());
        assert_eq!(form.value("name"), Some(""));
    }

    #[test]
    fn test_transport_rates() {
        let mut never = SimulatedTransport::new(&SubmitOptions {
            failure_rate: 0.0,
            seed: Some(7),
            ..Default::default()
        });
        let mut always = SimulatedTransport::new(&SubmitOptions {
            failure_rate: 1.0,
            seed: Some(7),
            ..Default::default()
        });
        for _ in 0..32 {
            assert_eq!(never.roll(), Ok(()));
            assert_eq!(always.roll(), Err(SubmitError::Rejected));
        }
    }
}
