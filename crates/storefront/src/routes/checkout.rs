//! Checkout submission.
//!
//! Checkout stops at the order boundary: a validated submission is
//! logged and the cart is cleared, but no payment gateway or order
//! backend is called.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, instrument};

use omniworld_core::{Email, Phone, pricing::format_inr};

use crate::filters;
use crate::routes::cart::{CartShowTemplate, CartView};
use crate::state::AppState;

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Upi,
    Netbanking,
    Wallet,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::Card,
        Self::Upi,
        Self::Netbanking,
        Self::Wallet,
        Self::Cod,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Netbanking => "netbanking",
            Self::Wallet => "wallet",
            Self::Cod => "cod",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit / Debit Card",
            Self::Upi => "UPI",
            Self::Netbanking => "Net Banking",
            Self::Wallet => "Wallet",
            Self::Cod => "Cash on Delivery",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Card => "Visa, Mastercard, RuPay",
            Self::Upi => "Pay with any UPI app",
            Self::Netbanking => "All major banks supported",
            Self::Wallet => "Paytm, PhonePe and more",
            Self::Cod => "Pay when your order arrives",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// Payment option display data for the cart page.
#[derive(Clone)]
pub struct PaymentMethodView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

/// Build the payment option list with the form's selection marked.
#[must_use]
pub fn payment_methods(form: &CheckoutForm) -> Vec<PaymentMethodView> {
    PaymentMethod::ALL
        .into_iter()
        .map(|method| PaymentMethodView {
            id: method.id(),
            label: method.label(),
            description: method.description(),
            selected: form.payment_method == method.id(),
        })
        .collect()
}

/// Checkout form fields, echoed back on validation failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub payment_method: String,
}

/// Per-field validation messages for checkout.
#[derive(Debug, Default)]
pub struct CheckoutErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub payment_method: Option<String>,
}

impl CheckoutErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.zip_code.is_none()
            && self.payment_method.is_none()
    }
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub name: String,
    pub total: String,
    pub item_count: u32,
    pub payment_label: &'static str,
}

fn validate(form: &CheckoutForm) -> CheckoutErrors {
    let mut errors = CheckoutErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Please enter your full name".to_owned());
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
    if form.address.trim().is_empty() {
        errors.address = Some("Please enter a delivery address".to_owned());
    }
    if form.city.trim().is_empty() {
        errors.city = Some("Please enter your city".to_owned());
    }
    if form.zip_code.trim().is_empty() {
        errors.zip_code = Some("Please enter your PIN code".to_owned());
    }
    if PaymentMethod::from_id(&form.payment_method).is_none() {
        errors.payment_method = Some("Please choose a payment method".to_owned());
    }

    errors
}

/// Handle a checkout submission.
///
/// An empty cart is redirected back to the cart page. Validation
/// failures re-render the cart page with inline messages and the cart
/// untouched. A valid order is logged and the cart cleared.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<CheckoutForm>) -> Response {
    if state.store().items().is_empty() {
        return Redirect::to("/cart").into_response();
    }

    let errors = validate(&form);
    if !errors.is_empty() {
        let page = CartShowTemplate {
            cart: CartView::from_state(&state),
            payment_methods: payment_methods(&form),
            form,
            errors,
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, page).into_response();
    }

    // from_id is Some here; validation checked it.
    let method = PaymentMethod::from_id(&form.payment_method).unwrap_or(PaymentMethod::Cod);
    let item_count = state.store().total_items();
    let total = format_inr(state.store().total_price(), state.config().inr_rate);

    info!(
        customer = %form.name,
        items = item_count,
        total = %total,
        payment = method.id(),
        "order placed"
    );

    state.store().clear_cart();

    CheckoutCompleteTemplate {
        name: form.name,
        total,
        item_count,
        payment_label: method.label(),
    }
    .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::NewCartItem;
    use crate::state::test_support::test_state;
    use rust_decimal::Decimal;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Priya Nair".to_owned(),
            email: "priya@example.com".to_owned(),
            phone: "9876543210".to_owned(),
            address: "14 MG Road".to_owned(),
            city: "Bengaluru".to_owned(),
            zip_code: "560001".to_owned(),
            payment_method: "upi".to_owned(),
        }
    }

    fn state_with_item() -> AppState {
        let state = test_state();
        state.store().add_item(NewCartItem {
            id: "thermo-dig".to_owned(),
            name: "Digital Thermometer".to_owned(),
            price: Decimal::new(899, 2),
            category: "Monitoring".to_owned(),
        });
        state
    }

    #[tokio::test]
    async fn test_empty_cart_redirects() {
        let response = submit(State(test_state()), Form(valid_form())).await;
        assert!(response.status().is_redirection());
    }

    #[tokio::test]
    async fn test_valid_order_clears_cart() {
        let state = state_with_item();

        let response = submit(State(state.clone()), Form(valid_form())).await;
        assert!(response.status().is_success());
        assert!(state.store().items().is_empty());
    }

    #[tokio::test]
    async fn test_missing_email_reports_error_and_keeps_cart() {
        let state = state_with_item();
        let mut form = valid_form();
        form.email = String::new();

        let response = submit(State(state.clone()), Form(form)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.store().items().len(), 1);
    }

    #[test]
    fn test_unknown_payment_method_is_rejected() {
        let mut form = valid_form();
        form.payment_method = "barter".to_owned();

        let errors = validate(&form);
        assert!(errors.payment_method.is_some());
    }

    #[test]
    fn test_payment_method_roundtrip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_id(method.id()), Some(method));
        }
        assert_eq!(PaymentMethod::from_id("cheque"), None);
    }

    #[test]
    fn test_payment_views_mark_selection() {
        let form = CheckoutForm {
            payment_method: "cod".to_owned(),
            ..CheckoutForm::default()
        };
        let views = payment_methods(&form);
        assert!(views.iter().any(|v| v.id == "cod" && v.selected));
        assert!(views.iter().filter(|v| v.selected).count() == 1);
    }
}
