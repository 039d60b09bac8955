use serde::{Deserialize, Serialize};

use crate::Error;

/// Body of `GET /users/{id}/notifications/unread-count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u64,
}

impl UnreadCount {
    pub fn from_json(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }

    /// Text for the badge, or `None` when the badge should stay hidden.
    pub fn badge_text(&self) -> Option<String> {
        (self.unread_count > 0).then(|| self.unread_count.to_string())
    }
}
