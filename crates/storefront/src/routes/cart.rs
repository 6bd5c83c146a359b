//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. Mutations go through the [`crate::store::CartStore`]; every
//! fragment response fires a `cart-updated` trigger so the header badge
//! stays current, and `notifications-updated` because cart mutations
//! emit notifications.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use omniworld_core::pricing::format_inr;

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::NewCartItem;
use crate::routes::checkout::{CheckoutErrors, CheckoutForm, PaymentMethodView, payment_methods};
use crate::state::AppState;

/// HTMX triggers fired by every cart mutation fragment.
const CART_TRIGGERS: (&str, &str) = ("HX-Trigger", "cart-updated, notifications-updated");

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Build the display cart from the store, formatting every price
    /// through the one conversion function.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let rate = state.config().inr_rate;
        let store = state.store();

        let items = store
            .items()
            .into_iter()
            .map(|item| CartItemView {
                line_price: format_inr(item.line_total(), rate),
                price: format_inr(item.price, rate),
                id: item.id,
                name: item.name,
                category: item.category,
                quantity: item.quantity,
            })
            .collect();

        Self {
            items,
            subtotal: format_inr(store.total_price(), rate),
            item_count: store.total_items(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: String,
}

/// Cart page template, including the checkout form.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub form: CheckoutForm,
    pub errors: CheckoutErrors,
    pub payment_methods: Vec<PaymentMethodView>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let form = CheckoutForm::default();

    CartShowTemplate {
        cart: CartView::from_state(&state),
        payment_methods: payment_methods(&form),
        form,
        errors: CheckoutErrors::default(),
    }
}

/// Add a catalog product to the cart (HTMX).
///
/// Returns the count badge with a trigger so the items fragment and the
/// notification badge refresh themselves.
///
/// # Errors
///
/// Returns 404 if the product id is not in the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .find(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    state.store().add_item(NewCartItem {
        id: product.id.to_owned(),
        name: product.name.to_owned(),
        price: product.price,
        category: product.category.name().to_owned(),
    });

    let count = state.store().total_items();
    Ok((AppendHeaders([CART_TRIGGERS]), CartCountTemplate { count }).into_response())
}

/// Set a cart line's quantity (HTMX). Zero or less removes the line.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    state.store().update_quantity(&form.item_id, form.quantity);

    (
        AppendHeaders([CART_TRIGGERS]),
        CartItemsTemplate {
            cart: CartView::from_state(&state),
        },
    )
        .into_response()
}

/// Remove a cart line (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    state.store().remove_item(&form.item_id);

    (
        AppendHeaders([CART_TRIGGERS]),
        CartItemsTemplate {
            cart: CartView::from_state(&state),
        },
    )
        .into_response()
}

/// Clear the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Response {
    state.store().clear_cart();

    (
        AppendHeaders([CART_TRIGGERS]),
        CartItemsTemplate {
            cart: CartView::from_state(&state),
        },
    )
        .into_response()
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.store().total_items(),
    }
}
