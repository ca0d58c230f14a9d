//! Notification endpoints.

use serde_json::json;

use super::api::{ApiClient, ApiError};
use super::types::{Notification, UnreadCount};

/// Fetch the signed-in user's notifications, newest first.
pub async fn list(api: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    api.get("/notifications").await
}

/// Mark one notification read; returns the updated document.
pub async fn mark_read(api: &ApiClient, notification_id: &str) -> Result<Notification, ApiError> {
    let body = json!({ "notification_id": notification_id });
    api.post("/notifications/mark-read", &body).await
}

/// Mark every notification read. The backend replies with a summary message
/// the client does not need.
pub async fn mark_all_read(api: &ApiClient) -> Result<(), ApiError> {
    let _: serde_json::Value = api.post_empty("/notifications/mark-all-read").await?;
    Ok(())
}

/// Count of unread notifications, for badge rendering.
pub async fn unread_count(api: &ApiClient) -> Result<i64, ApiError> {
    let body: UnreadCount = api.get("/notifications/unread-count").await?;
    Ok(body.count)
}
