//! Contact form model and validation.
//!
//! There is no backend: a valid submission is held in a short "sending" state,
//! then the form is cleared and a confirmation is shown for a few seconds.

use crate::constants::{CONTACT_SENT_SECS, CONTACT_SUBMIT_SECS, TOAST_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Sender name
    Name,
    /// Sender email address
    Email,
    /// Message subject
    Subject,
    /// Message body
    Message,
}

/// A validation failure tied to one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// The offending field
    pub field: Field,
    /// Human-readable explanation
    pub message: &'static str,
}

/// A validated message ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Body
    pub message: String,
}

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name as typed
    pub name: String,
    /// Email as typed
    pub email: String,
    /// Subject as typed
    pub subject: String,
    /// Body as typed
    pub message: String,
}

fn min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Loose structural check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

impl ContactForm {
    /// Validates every field, returning the trimmed message or all failures.
    pub fn validate(&self) -> Result<ContactMessage, Vec<FieldError>> {
        let mut errors = Vec::new();
        if !min_chars(&self.name, 2) {
            errors.push(FieldError {
                field: Field::Name,
                message: "Name must be at least 2 characters.",
            });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "Please enter a valid email address.",
            });
        }
        if !min_chars(&self.subject, 5) {
            errors.push(FieldError {
                field: Field::Subject,
                message: "Subject must be at least 5 characters.",
            });
        }
        if !min_chars(&self.message, 10) {
            errors.push(FieldError {
                field: Field::Message,
                message: "Message must be at least 10 characters.",
            });
        }

        if errors.is_empty() {
            Ok(ContactMessage {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                subject: self.subject.trim().to_string(),
                message: self.message.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    /// Accepting input
    Editing,
    /// Simulated send in progress since `since`
    Submitting {
        /// Start time in seconds
        since: f64,
        /// The message being sent
        message: ContactMessage,
    },
    /// Confirmation shown since `since`
    Sent {
        /// Start time in seconds
        since: f64,
    },
}

/// Form input plus its submit cycle and the latest validation errors.
#[derive(Debug, Clone)]
pub struct ContactState {
    /// Current input
    pub form: ContactForm,
    /// Errors from the last submit attempt
    pub errors: Vec<FieldError>,
    /// Submit cycle
    pub status: SubmitStatus,
    /// Messages "sent" this session
    pub outbox: Vec<ContactMessage>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            errors: Vec::new(),
            status: SubmitStatus::Editing,
            outbox: Vec::new(),
        }
    }
}

impl ContactState {
    /// Validates and, on success, starts the simulated send at `now`.
    ///
    /// Ignored while a send is already in progress or being confirmed.
    pub fn submit(&mut self, now: f64) -> Result<(), Vec<FieldError>> {
        if self.status != SubmitStatus::Editing {
            return Ok(());
        }
        match self.form.validate() {
            Ok(message) => {
                self.errors.clear();
                self.status = SubmitStatus::Submitting { since: now, message };
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Advances the submit cycle to time `now`.
    pub fn tick(&mut self, now: f64) {
        match &self.status {
            SubmitStatus::Submitting { since, message } if now - since >= CONTACT_SUBMIT_SECS => {
                log::info!("Contact message from {} <{}> sent", message.name, message.email);
                self.outbox.push(message.clone());
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent { since: now };
            }
            SubmitStatus::Sent { since } if now - since >= CONTACT_SENT_SECS => {
                self.status = SubmitStatus::Editing;
            }
            _ => {}
        }
    }

    /// The validation error for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Success notice to float over the page at time `now`, shortly after a send completes.
    pub fn toast(&self, now: f64) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Sent { since } if now - since < TOAST_SECS => Some("Message sent successfully!"),
            _ => None,
        }
    }

    /// True while the cycle needs repaints to progress.
    pub fn is_busy(&self) -> bool {
        self.status != SubmitStatus::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello there".into(),
            message: "I would like to work with you.".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let message = valid_form().validate().unwrap();
        assert_eq!(message.email, "ada@example.com");
    }

    #[test]
    fn test_every_rule_reports_its_field() {
        let form = ContactForm {
            name: " A ".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "short".into(),
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Subject, Field::Message]);
        assert_eq!(errors[0].to_string(), "Name must be at least 2 characters.");
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" someone@mail.example.org "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b..com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_submit_cycle() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        state.submit(10.0).unwrap();
        assert!(matches!(state.status, SubmitStatus::Submitting { .. }));
        assert!(state.is_busy());

        state.tick(11.0);
        assert!(matches!(state.status, SubmitStatus::Submitting { .. }));

        state.tick(11.5);
        assert_eq!(state.status, SubmitStatus::Sent { since: 11.5 });
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.outbox.len(), 1);

        assert_eq!(state.toast(11.5), Some("Message sent successfully!"));
        assert_eq!(state.toast(15.4), Some("Message sent successfully!"));
        assert_eq!(state.toast(15.5), None);

        state.tick(16.5);
        assert_eq!(state.status, SubmitStatus::Editing);
        assert_eq!(state.toast(16.5), None);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_no_toast_before_send_completes() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        assert_eq!(state.toast(0.0), None);
        state.submit(0.0).unwrap();
        assert_eq!(state.toast(1.0), None);
    }

    #[test]
    fn test_invalid_submit_keeps_editing() {
        let mut state = ContactState::default();
        let errors = state.submit(0.0).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(state.status, SubmitStatus::Editing);
        assert!(state.error_for(Field::Email).is_some());

        state.form = valid_form();
        state.submit(1.0).unwrap();
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_submit_ignored_while_busy() {
        let mut state = ContactState {
            form: valid_form(),
            ..Default::default()
        };
        state.submit(0.0).unwrap();
        state.submit(0.5).unwrap();
        state.tick(1.5);
        assert_eq!(state.outbox.len(), 1);
    }
}
