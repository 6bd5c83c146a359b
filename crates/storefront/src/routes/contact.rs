//! Contact page and form submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::{info, instrument};

use omniworld_core::Email;

use crate::filters;

/// Contact form fields, echoed back on validation failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Per-field validation messages for the contact form.
#[derive(Debug, Default)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub submitted: bool,
}

fn validate(form: &ContactForm) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Please enter your name".to_owned());
    }
    if form.email.trim().is_empty() {
        errors.email = Some("Please enter your email address".to_owned());
    } else if Email::parse(&form.email).is_err() {
        errors.email = Some("Please enter a valid email address".to_owned());
    }
    if form.subject.trim().is_empty() {
        errors.subject = Some("Please enter a subject".to_owned());
    }
    if form.message.trim().is_empty() {
        errors.message = Some("Please enter a message".to_owned());
    }

    errors
}

/// Display the contact page.
#[instrument]
pub async fn show() -> ContactTemplate {
    ContactTemplate {
        form: ContactForm::default(),
        errors: ContactErrors::default(),
        submitted: false,
    }
}

/// Handle a contact form submission.
///
/// Valid submissions are logged (no mail backend is wired up) and the
/// page re-renders with a confirmation. Invalid submissions re-render
/// with inline messages and the entered values preserved.
#[instrument(skip(form))]
pub async fn submit(Form(form): Form<ContactForm>) -> ContactTemplate {
    let errors = validate(&form);

    if errors.is_empty() {
        info!(subject = %form.subject, "contact message received");
        return ContactTemplate {
            form: ContactForm::default(),
            errors: ContactErrors::default(),
            submitted: true,
        };
    }

    ContactTemplate {
        form,
        errors,
        submitted: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            subject: "Bulk order enquiry".to_owned(),
            message: "Do you ship to Pune?".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_confirms_and_resets() {
        let page = submit(Form(valid_form())).await;
        assert!(page.submitted);
        assert!(page.errors.is_empty());
        assert!(page.form.name.is_empty());
    }

    #[tokio::test]
    async fn test_bad_email_is_rejected_with_values_kept() {
        let mut form = valid_form();
        form.email = "not-an-email".to_owned();

        let page = submit(Form(form)).await;
        assert!(!page.submitted);
        assert!(page.errors.email.is_some());
        assert_eq!(page.form.name, "Asha Rao");
    }

    #[tokio::test]
    async fn test_all_fields_required() {
        let page = submit(Form(ContactForm::default())).await;
        assert!(page.errors.name.is_some());
        assert!(page.errors.email.is_some());
        assert!(page.errors.subject.is_some());
        assert!(page.errors.message.is_some());
    }
}
