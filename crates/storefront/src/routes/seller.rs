//! Seller onboarding page and application form.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::{info, instrument};

use omniworld_core::{Email, Phone};

use crate::filters;

/// Business types a seller can apply under.
pub const BUSINESS_TYPES: [&str; 5] =
    ["Manufacturer", "Distributor", "Pharmacy", "Laboratory", "Other"];

/// A business-type option with the form's selection marked.
#[derive(Clone)]
pub struct BusinessTypeView {
    pub name: &'static str,
    pub selected: bool,
}

fn business_types(form: &SellerForm) -> Vec<BusinessTypeView> {
    BUSINESS_TYPES
        .into_iter()
        .map(|name| BusinessTypeView {
            name,
            selected: form.business_type == name,
        })
        .collect()
}

/// Seller application fields, echoed back on validation failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SellerForm {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub description: String,
}

/// Per-field validation messages for the seller application.
#[derive(Debug, Default)]
pub struct SellerErrors {
    pub business_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub description: Option<String>,
}

impl SellerErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.business_name.is_none()
            && self.contact_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.business_type.is_none()
            && self.description.is_none()
    }
}

/// Seller landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "seller.html")]
pub struct SellerTemplate {
    pub form: SellerForm,
    pub errors: SellerErrors,
    pub business_types: Vec<BusinessTypeView>,
    pub submitted: bool,
}

fn validate(form: &SellerForm) -> SellerErrors {
    let mut errors = SellerErrors::default();

    if form.business_name.trim().is_empty() {
        errors.business_name = Some("Please enter your business name".to_owned());
    }
    if form.contact_name.trim().is_empty() {
        errors.contact_name = Some("Please enter a contact name".to_owned());
    }
    if form.email.trim().is_empty() {
        errors.email = Some("Please enter your email address".to_owned());
    } else if Email::parse(&form.email).is_err() {
        errors.email = Some("Please enter a valid email address".to_owned());
    }
    if form.phone.trim().is_empty() {
        errors.phone = Some("Please enter a phone number".to_owned());
    } else if Phone::parse(&form.phone).is_err() {
        errors.phone = Some("Please enter a valid 10-digit phone number".to_owned());
    }
    if !BUSINESS_TYPES.contains(&form.business_type.as_str()) {
        errors.business_type = Some("Please select a business type".to_owned());
    }
    if form.description.trim().is_empty() {
        errors.description = Some("Please describe your business".to_owned());
    }

    errors
}

/// Display the seller landing page.
#[instrument]
pub async fn show() -> SellerTemplate {
    let form = SellerForm::default();
    SellerTemplate {
        business_types: business_types(&form),
        form,
        errors: SellerErrors::default(),
        submitted: false,
    }
}

/// Handle a seller application submission.
///
/// Applications are logged for follow-up; there is no review backend.
#[instrument(skip(form))]
pub async fn submit(Form(form): Form<SellerForm>) -> SellerTemplate {
    let errors = validate(&form);

    if errors.is_empty() {
        info!(
            business = %form.business_name,
            business_type = %form.business_type,
            "seller application received"
        );
        let form = SellerForm::default();
        return SellerTemplate {
            business_types: business_types(&form),
            form,
            errors: SellerErrors::default(),
            submitted: true,
        };
    }

    SellerTemplate {
        business_types: business_types(&form),
        form,
        errors,
        submitted: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> SellerForm {
        SellerForm {
            business_name: "Sharma Surgicals".to_owned(),
            contact_name: "R. Sharma".to_owned(),
            email: "sales@sharmasurgicals.example".to_owned(),
            phone: "98765 43210".to_owned(),
            business_type: "Distributor".to_owned(),
            description: "Surgical supplies distributor, Mumbai".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_valid_application_confirms() {
        let page = submit(Form(valid_form())).await;
        assert!(page.submitted);
        assert!(page.errors.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_business_type_is_rejected() {
        let mut form = valid_form();
        form.business_type = "Wizard".to_owned();

        let page = submit(Form(form)).await;
        assert!(!page.submitted);
        assert!(page.errors.business_type.is_some());
    }

    #[tokio::test]
    async fn test_short_phone_is_rejected() {
        let mut form = valid_form();
        form.phone = "12345".to_owned();

        let page = submit(Form(form)).await;
        assert!(page.errors.phone.is_some());
    }
}
