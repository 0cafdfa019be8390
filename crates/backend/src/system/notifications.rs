//! In-app notifications: list, mark one read, mark all read.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use contracts::shared::DataEnvelope;
use contracts::system::notifications::Notification;
use tokio::sync::RwLock;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;

#[derive(Debug, Default)]
pub struct NotificationStore {
    items: RwLock<Vec<Notification>>,
}

impl NotificationStore {
    pub async fn seed(&self) {
        let now = Utc::now();
        let rows = [
            ("order", "New order received", "Order #1042 is waiting for review.", 5),
            ("meeting", "Meeting request", "A client asked for a consulting session.", 90),
            ("system", "Payment account verified", "Your bank details were approved.", 60 * 26),
        ];
        let mut items = self.items.write().await;
        for (kind, title, message, minutes_ago) in rows {
            let id = items.len() as i64 + 1;
            items.push(Notification {
                id,
                kind: kind.into(),
                title: title.into(),
                message: message.into(),
                link: None,
                read_at: None,
                created_at: now - Duration::minutes(minutes_ago),
            });
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Newest first
    pub async fn list(&self) -> Vec<Notification> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Returns false when no notification has this id
    pub async fn mark_read(&self, id: i64) -> bool {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read_at.get_or_insert_with(Utc::now);
                true
            }
            None => false,
        }
    }

    /// Number of notifications that changed state
    pub async fn mark_all_read(&self) -> usize {
        let now = Utc::now();
        let mut changed = 0;
        for item in self.items.write().await.iter_mut().filter(|n| n.read_at.is_none()) {
            item.read_at = Some(now);
            changed += 1;
        }
        changed
    }
}

/// GET /api/notifications
pub async fn list(State(state): State<AppState>) -> Json<DataEnvelope<Vec<Notification>>> {
    Json(DataEnvelope::new(state.notifications.list().await))
}

/// PUT /api/notifications/:id/read
pub async fn mark_read(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    if !state.notifications.mark_read(id).await {
        return Err(ApiError::NotFound(format!("Notification {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(State(state): State<AppState>) -> StatusCode {
    let changed = state.notifications.mark_all_read().await;
    tracing::debug!("marked {} notifications as read", changed);
    StatusCode::NO_CONTENT
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/read-all", put(mark_all_read))
        .route("/:id/read", put(mark_read))
}
