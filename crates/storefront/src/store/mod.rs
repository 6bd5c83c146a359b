//! Cart and notification state container.
//!
//! [`CartStore`] is the single source of truth for cart contents and the
//! notification feed for the lifetime of the process. It is constructed
//! explicitly and handed to [`crate::state::AppState`]; nothing here is
//! a global. Every mutation re-serializes the affected collection and
//! writes it through to the [`Storage`] backend immediately.
//!
//! Persistence is best-effort by design: a failed write is logged and
//! the in-memory state stays authoritative for the session. All
//! operations are total - absent ids are safe no-ops and nothing here
//! returns an application-level error.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{CartItem, NewCartItem, Notification, NotificationKind};

/// Storage key for the serialized cart collection.
pub const CART_KEY: &str = "omniworld-cart";

/// Storage key for the serialized notification feed.
pub const NOTIFICATIONS_KEY: &str = "omniworld-notifications";

/// Maximum number of notifications retained, newest first.
pub const MAX_NOTIFICATIONS: usize = 50;

struct StoreInner {
    items: Vec<CartItem>,
    notifications: Vec<Notification>,
    /// Disambiguates notification ids created in the same millisecond.
    notification_seq: u64,
}

/// The cart/notification state container.
///
/// Cheap to share via [`crate::state::AppState`]; all operations lock,
/// mutate, persist, and release, so each is atomic from the caller's
/// perspective.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    inner: Mutex<StoreInner>,
}

impl CartStore {
    /// Open the store, rehydrating both collections from `storage`.
    ///
    /// Absent or malformed documents default to empty collections; a
    /// malformed document is logged and discarded rather than failing
    /// startup.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let items = load_collection(storage.as_ref(), CART_KEY);
        let notifications = load_collection(storage.as_ref(), NOTIFICATIONS_KEY);

        Self {
            storage,
            inner: Mutex::new(StoreInner {
                items,
                notifications,
                notification_seq: 0,
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Add one unit of `item` to the cart.
    ///
    /// If a line with the same id exists its quantity is incremented,
    /// otherwise a new line with quantity 1 is inserted. Emits a
    /// "success" notification either way.
    pub fn add_item(&self, item: NewCartItem) {
        let mut inner = self.lock();

        if let Some(existing) = inner.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
        } else {
            inner.items.push(CartItem {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
                category: item.category,
            });
        }
        self.persist_cart(&inner);

        let message = format!("{} has been added to your cart", item.name);
        self.push_notification(&mut inner, "Item Added", &message, NotificationKind::Success);
    }

    /// Remove the line with `id` from the cart.
    ///
    /// Emits an "info" notification naming the removed item; a no-op if
    /// no such line exists.
    pub fn remove_item(&self, id: &str) {
        let mut inner = self.lock();

        let Some(pos) = inner.items.iter().position(|i| i.id == id) else {
            return;
        };
        let removed = inner.items.remove(pos);
        self.persist_cart(&inner);

        let message = format!("{} has been removed from your cart", removed.name);
        self.push_notification(&mut inner, "Item Removed", &message, NotificationKind::Info);
    }

    /// Set the quantity of the line with `id`.
    ///
    /// A quantity of zero or less removes the line (identical to
    /// [`Self::remove_item`], notification included). Setting a quantity
    /// on an absent id is a no-op, and no notification is emitted on the
    /// update path.
    pub fn update_quantity(&self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let mut inner = self.lock();
        if let Some(item) = inner.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
            self.persist_cart(&inner);
        }
    }

    /// Empty the cart unconditionally and emit an "info" notification.
    pub fn clear_cart(&self) {
        let mut inner = self.lock();
        inner.items.clear();
        self.persist_cart(&inner);

        self.push_notification(
            &mut inner,
            "Cart Cleared",
            "All items have been removed from your cart",
            NotificationKind::Info,
        );
    }

    /// Snapshot of the cart lines.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items.clone()
    }

    /// Sum of `price * quantity` over all lines, in the base currency.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lock().items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lock().items.iter().map(|i| i.quantity).sum()
    }

    // -------------------------------------------------------------------------
    // Notification operations
    // -------------------------------------------------------------------------

    /// Prepend a notification to the feed.
    ///
    /// The feed is truncated to the most recent [`MAX_NOTIFICATIONS`]
    /// entries, oldest dropped first.
    pub fn add_notification(&self, title: &str, message: &str, kind: NotificationKind) {
        let mut inner = self.lock();
        self.push_notification(&mut inner, title, message, kind);
    }

    /// Mark the notification with `id` as read; a no-op if absent.
    pub fn mark_notification_read(&self, id: &str) {
        let mut inner = self.lock();
        if let Some(notification) = inner.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
            self.persist_notifications(&inner);
        }
    }

    /// Empty the notification feed unconditionally.
    pub fn clear_notifications(&self) {
        let mut inner = self.lock();
        inner.notifications.clear();
        self.persist_notifications(&inner);
    }

    /// Snapshot of the feed, newest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.lock().notifications.iter().filter(|n| !n.read).count()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push_notification(
        &self,
        inner: &mut StoreInner,
        title: &str,
        message: &str,
        kind: NotificationKind,
    ) {
        inner.notification_seq += 1;
        let notification = Notification {
            id: format!("{}-{}", Utc::now().timestamp_millis(), inner.notification_seq),
            title: title.to_owned(),
            message: message.to_owned(),
            kind,
            created_at: Utc::now(),
            read: false,
        };

        inner.notifications.insert(0, notification);
        inner.notifications.truncate(MAX_NOTIFICATIONS);
        self.persist_notifications(inner);
    }

    fn persist_cart(&self, inner: &StoreInner) {
        persist(self.storage.as_ref(), CART_KEY, &inner.items);
    }

    fn persist_notifications(&self, inner: &StoreInner) {
        persist(self.storage.as_ref(), NOTIFICATIONS_KEY, &inner.notifications);
    }
}

/// Load one collection, treating absent or malformed documents as empty.
fn load_collection<T: serde::de::DeserializeOwned>(storage: &dyn Storage, key: &str) -> Vec<T> {
    let document = match storage.load(key) {
        Ok(Some(document)) => document,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored document, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&document) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed stored document");
            Vec::new()
        }
    }
}

/// Write one collection through to storage, logging (not surfacing)
/// failures.
fn persist<T: serde::Serialize>(storage: &dyn Storage, key: &str, collection: &[T]) {
    let document = match serde_json::to_string(collection) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize collection");
            return;
        }
    };

    if let Err(e) = storage.save(key, &document) {
        tracing::warn!(key, error = %e, "Failed to persist collection");
    }
}
