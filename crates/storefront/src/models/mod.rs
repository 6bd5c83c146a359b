//! Domain models for the storefront.
//!
//! The cart and notification records are owned exclusively by
//! [`crate::store::CartStore`]; everything else in the crate reads them
//! through it.

pub mod cart;
pub mod notification;

pub use cart::{CartItem, NewCartItem};
pub use notification::{Notification, NotificationKind};
