//! Notification feed handlers.
//!
//! The feed lives in a header dropdown refreshed over HTMX; mutations
//! return the feed fragment and fire `notifications-updated` so the
//! unread badge refreshes too.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::models::Notification;
use crate::state::AppState;

const NOTIFICATION_TRIGGERS: (&str, &str) = ("HX-Trigger", "notifications-updated");

/// Notification display data for templates.
#[derive(Clone)]
pub struct NotificationView {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: &'static str,
    pub timestamp: String,
    pub read: bool,
}

impl NotificationView {
    fn from_notification(notification: Notification) -> Self {
        Self {
            timestamp: notification.created_at.format("%H:%M:%S").to_string(),
            kind: notification.kind.as_str(),
            id: notification.id,
            title: notification.title,
            message: notification.message,
            read: notification.read,
        }
    }
}

/// Notification page template.
#[derive(Template, WebTemplate)]
#[template(path = "notifications.html")]
pub struct NotificationsTemplate {
    pub notifications: Vec<NotificationView>,
    pub unread: usize,
}

/// Notification feed fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notification_feed.html")]
pub struct NotificationFeedTemplate {
    pub notifications: Vec<NotificationView>,
}

/// Unread badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notification_count.html")]
pub struct NotificationCountTemplate {
    pub unread: usize,
}

/// Mark-read form data.
#[derive(Debug, Deserialize)]
pub struct MarkReadForm {
    pub notification_id: String,
}

fn feed(state: &AppState) -> Vec<NotificationView> {
    state
        .store()
        .notifications()
        .into_iter()
        .map(NotificationView::from_notification)
        .collect()
}

/// Display the notification feed page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> NotificationsTemplate {
    NotificationsTemplate {
        notifications: feed(&state),
        unread: state.store().unread_count(),
    }
}

/// Get the unread badge fragment (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> NotificationCountTemplate {
    NotificationCountTemplate {
        unread: state.store().unread_count(),
    }
}

/// Mark a notification read (HTMX). Unknown ids are a no-op.
#[instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    Form(form): Form<MarkReadForm>,
) -> Response {
    state.store().mark_notification_read(&form.notification_id);

    (
        AppendHeaders([NOTIFICATION_TRIGGERS]),
        NotificationFeedTemplate {
            notifications: feed(&state),
        },
    )
        .into_response()
}

/// Clear the feed (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Response {
    state.store().clear_notifications();

    (
        AppendHeaders([NOTIFICATION_TRIGGERS]),
        NotificationFeedTemplate {
            notifications: Vec::new(),
        },
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{NewCartItem, NotificationKind};
    use crate::state::test_support::test_state;
    use rust_decimal::Decimal;

    fn seeded_state() -> AppState {
        let state = test_state();
        state.store().add_item(NewCartItem {
            id: "mask-n95".to_owned(),
            name: "N95 Mask".to_owned(),
            price: Decimal::ONE,
            category: "PPE".to_owned(),
        });
        state
    }

    #[tokio::test]
    async fn test_show_lists_unread_first() {
        let state = seeded_state();

        let page = show(State(state)).await;
        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.unread, 1);
        assert_eq!(page.notifications.first().unwrap().kind, "success");
    }

    #[tokio::test]
    async fn test_mark_read_clears_badge() {
        let state = seeded_state();
        let id = state.store().notifications().remove(0).id;

        let response = mark_read(
            State(state.clone()),
            Form(MarkReadForm {
                notification_id: id,
            }),
        )
        .await;

        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("HX-Trigger").unwrap(),
            "notifications-updated"
        );
        assert_eq!(state.store().unread_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_empties_feed() {
        let state = seeded_state();
        clear(State(state.clone())).await;
        assert!(state.store().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_view_carries_kind_label() {
        let state = test_state();
        state
            .store()
            .add_notification("Heads up", "Stock is low", NotificationKind::Warning);

        let page = show(State(state)).await;
        assert_eq!(page.notifications.first().unwrap().kind, "warning");
    }
}
