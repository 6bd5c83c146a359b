//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (divisions, search suggestions)
//! GET  /health                 - Health check (registered in main)
//!
//! # Marketing pages
//! GET  /about                  - About page
//! GET  /help                   - Help center
//! GET  /contact                - Contact page
//! POST /contact                - Contact form submission
//! GET  /be-seller              - Seller landing + application form
//! POST /be-seller              - Seller application submission
//! GET  /{division}             - Coming-soon page for other divisions
//!
//! # Healthcare catalog
//! GET  /healthcare             - Category cards + featured products
//! GET  /healthcare/{slug}      - Category page (filter + search)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page with checkout form
//! POST /cart/add               - Add item (returns count fragment,
//!                                triggers cart-updated)
//! POST /cart/update            - Set quantity (returns items fragment)
//! POST /cart/remove            - Remove line (returns items fragment)
//! POST /cart/clear             - Clear cart (returns items fragment)
//! GET  /cart/count             - Cart count badge fragment
//!
//! # Notifications (HTMX fragments)
//! GET  /notifications          - Notification feed page
//! GET  /notifications/count    - Unread badge fragment
//! POST /notifications/read     - Mark one read (returns feed fragment)
//! POST /notifications/clear    - Clear feed (returns feed fragment)
//!
//! # Checkout
//! POST /checkout               - Checkout submission (stub boundary:
//!                                logs the order, clears the cart)
//! ```

pub mod cart;
pub mod checkout;
pub mod contact;
pub mod healthcare;
pub mod home;
pub mod notifications;
pub mod pages;
pub mod seller;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the healthcare routes router.
pub fn healthcare_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(healthcare::index))
        .route("/{slug}", get(healthcare::category))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the notification routes router.
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::show))
        .route("/count", get(notifications::count))
        .route("/read", post(notifications::mark_read))
        .route("/clear", post(notifications::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Marketing pages
        .route("/about", get(pages::about))
        .route("/help", get(pages::help))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/be-seller", get(seller::show).post(seller::submit))
        // Healthcare catalog
        .nest("/healthcare", healthcare_routes())
        // Cart
        .nest("/cart", cart_routes())
        // Notifications
        .nest("/notifications", notification_routes())
        // Checkout submission
        .route("/checkout", post(checkout::submit))
        // Division catch-all (static routes above take precedence)
        .route("/{division}", get(pages::coming_soon))
}
