//! Direct message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, Entity, EntityKind};

/// A direct message between two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: String,
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = timestamp::now();
        Self {
            id,
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` sent or received this message
    pub fn involves(&self, user_id: &str) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

impl Entity for Message {
    const KIND: EntityKind = EntityKind::Message;

    fn id(&self) -> &str {
        &self.id
    }
}
