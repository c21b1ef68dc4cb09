//! Lead-capture form state machine
//!
//! Field values, per-field errors, touched flags, and the submission
//! flags live here so the browser component stays a thin wiring layer.
//! Live feedback for a field starts once the visitor has touched it,
//! either by leaving the field or by attempting to submit.

use serde::Serialize;

use crate::validate::{validate_email, validate_name};

/// The two form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

/// Visitor-entered values; serialized as-is into the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
}

/// Inline error per field. `None` means the field passed its most
/// recent evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Which fields the visitor has interacted with so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touched {
    pub name: bool,
    pub email: bool,
}

/// Complete state of the lead-capture form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub fields: LeadFields,
    pub errors: FieldErrors,
    pub touched: Touched,
    pub submitting: bool,
    pub success: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke. Feedback stays silent until the field has
    /// been touched; after that every edit re-validates it.
    pub fn input(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.fields.name = value;
                if self.touched.name {
                    self.errors.name = validate_name(&self.fields.name);
                }
            }
            Field::Email => {
                self.fields.email = value;
                if self.touched.email {
                    self.errors.email = validate_email(&self.fields.email);
                }
            }
        }
    }

    /// Leaving a field marks it touched and evaluates it immediately.
    pub fn blur(&mut self, field: Field) {
        match field {
            Field::Name => {
                self.touched.name = true;
                self.errors.name = validate_name(&self.fields.name);
            }
            Field::Email => {
                self.touched.email = true;
                self.errors.email = validate_email(&self.fields.email);
            }
        }
    }

    /// Validate everything for a submit attempt. Returns the payload to
    /// POST when the form is clean, `None` when errors are now showing.
    /// A submit already in flight leaves the state untouched.
    pub fn begin_submit(&mut self) -> Option<LeadFields> {
        if self.submitting {
            return None;
        }

        self.touched = Touched {
            name: true,
            email: true,
        };
        self.errors = FieldErrors {
            name: validate_name(&self.fields.name),
            email: validate_email(&self.fields.email),
        };

        if !self.errors.is_clear() {
            return None;
        }

        self.submitting = true;
        Some(self.fields.clone())
    }

    /// The endpoint accepted the lead: clear the form and raise the
    /// success banner.
    pub fn finish_success(&mut self) {
        self.fields = LeadFields::default();
        self.errors = FieldErrors::default();
        self.touched = Touched::default();
        self.submitting = false;
        self.success = true;
    }

    /// The attempt failed, or was aborted before any network call: keep
    /// the visitor's input so they can retry.
    pub fn finish_failure(&mut self) {
        self.submitting = false;
    }

    /// Banner expiry.
    pub fn clear_success(&mut self) {
        self.success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};

    fn filled(name: &str, email: &str) -> LeadForm {
        let mut form = LeadForm::new();
        form.input(Field::Name, name.to_string());
        form.input(Field::Email, email.to_string());
        form
    }

    #[test]
    fn test_untouched_fields_stay_silent() {
        let mut form = LeadForm::new();
        form.input(Field::Name, "A".to_string());
        form.input(Field::Email, "not-an-email".to_string());
        assert!(form.errors.is_clear());
    }

    #[test]
    fn test_blur_evaluates_immediately() {
        let mut form = LeadForm::new();
        form.blur(Field::Email);
        assert!(form.touched.email);
        assert_eq!(form.errors.email, Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.name, None);
    }

    #[test]
    fn test_edits_revalidate_after_touch() {
        let mut form = LeadForm::new();
        form.blur(Field::Email);
        form.input(Field::Email, "alice@example".to_string());
        assert_eq!(form.errors.email, Some(EMAIL_INVALID));
        form.input(Field::Email, "alice@example.com".to_string());
        assert_eq!(form.errors.email, None);
    }

    #[test]
    fn test_submit_with_empty_fields_shows_both_errors() {
        let mut form = LeadForm::new();
        assert_eq!(form.begin_submit(), None);
        assert!(form.touched.name && form.touched.email);
        assert_eq!(form.errors.name, Some(NAME_REQUIRED));
        assert_eq!(form.errors.email, Some(EMAIL_REQUIRED));
        assert!(!form.submitting);
    }

    #[test]
    fn test_submit_with_bad_email_only_flags_email() {
        let mut form = filled("Al", "bad-email");
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.errors.name, None);
        assert_eq!(form.errors.email, Some(EMAIL_INVALID));
        assert!(!form.submitting);
    }

    #[test]
    fn test_submit_with_valid_input_yields_payload() {
        let mut form = filled("Alice", "alice@example.com");
        let payload = form.begin_submit().expect("form is clean");
        assert_eq!(payload.name, "Alice");
        assert_eq!(payload.email, "alice@example.com");
        assert!(form.submitting);
        assert!(form.errors.is_clear());
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut form = filled("Alice", "alice@example.com");
        assert!(form.begin_submit().is_some());

        let in_flight = form.clone();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form, in_flight);
    }

    #[test]
    fn test_success_resets_everything() {
        let mut form = filled("Alice", "alice@example.com");
        form.begin_submit().expect("form is clean");
        form.finish_success();

        assert_eq!(form.fields, LeadFields::default());
        assert_eq!(form.errors, FieldErrors::default());
        assert_eq!(form.touched, Touched::default());
        assert!(!form.submitting);
        assert!(form.success);

        form.clear_success();
        assert!(!form.success);
    }

    #[test]
    fn test_failure_preserves_input_for_retry() {
        let mut form = filled("Alice", "alice@example.com");
        form.begin_submit().expect("form is clean");
        form.finish_failure();

        assert_eq!(form.fields.name, "Alice");
        assert_eq!(form.fields.email, "alice@example.com");
        assert!(!form.submitting);
        assert!(!form.success);

        // The retry goes through unchanged.
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_payload_serializes_name_and_email_only() {
        let payload = LeadFields {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(
            json,
            serde_json::json!({"name": "Alice", "email": "alice@example.com"})
        );
    }
}
