use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed refresh period of the notification bell
pub const POLL_INTERVAL_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_read()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unread_count() {
        let items: Vec<Notification> = serde_json::from_value(json!([
            {"id": 1, "type": "meeting", "title": "New meeting", "created_at": "2024-03-15T14:02:26Z"},
            {"id": 2, "type": "order", "title": "Order paid", "created_at": "2024-03-15T14:02:26Z",
             "read_at": "2024-03-16T08:00:00Z"}
        ]))
        .unwrap();
        assert_eq!(unread_count(&items), 1);
        assert_eq!(items[0].kind, "meeting");
    }
}
