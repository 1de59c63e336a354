//! Message Manager
//!
//! Every message is referenced from two inbox entries, the sender's and the
//! receiver's. Both are kept under the same lock as the messages themselves
//! so the two references appear and disappear together.

use std::collections::HashMap;

use crate::entities::{next_id, EntityKind, Message};
use crate::error::Result;
use crate::store::Store;

/// user id → ids of the messages that user sent or received, in send order
type Inboxes = HashMap<String, Vec<String>>;

/// Owns every direct message
#[derive(Default)]
pub struct MessageManager {
    messages: Store<Message, Inboxes>,
}

impl MessageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a message and index it under both participants
    ///
    /// A message to oneself is indexed once.
    pub fn send_message(&self, from_user_id: &str, to_user_id: &str, body: &str) -> Message {
        let message = self.messages.transact(|table| {
            let message = Message::new(
                next_id(EntityKind::Message),
                from_user_id,
                to_user_id,
                body,
            );

            table
                .index
                .entry(from_user_id.to_string())
                .or_default()
                .push(message.id.clone());
            if to_user_id != from_user_id {
                table
                    .index
                    .entry(to_user_id.to_string())
                    .or_default()
                    .push(message.id.clone());
            }

            table.insert(message.clone());
            message
        });

        tracing::debug!(message_id = %message.id, from_user_id, to_user_id, "message sent");
        message
    }

    /// Messages the user sent or received, oldest first
    ///
    /// Unknown users simply have an empty inbox.
    pub fn fetch_messages(&self, user_id: &str) -> Vec<Message> {
        self.messages.transact(|table| {
            table
                .index
                .get(user_id)
                .map(|ids| {
                    ids.iter()
                        .filter_map(|id| table.entries.get(id).cloned())
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    pub fn fetch_message(&self, message_id: &str) -> Result<Message> {
        self.messages.get(message_id)
    }

    /// Remove a message from the store and from both participants' inboxes
    pub fn remove_message(&self, message_id: &str) -> bool {
        let removed = self.messages.transact(|table| {
            let Some(message) = table.entries.remove(message_id) else {
                return false;
            };

            for user_id in [&message.sender_id, &message.receiver_id] {
                if let Some(ids) = table.index.get_mut(user_id.as_str()) {
                    ids.retain(|id| id != message_id);
                    if ids.is_empty() {
                        table.index.remove(user_id.as_str());
                    }
                }
            }
            true
        });

        tracing::debug!(message_id, removed, "message remove");
        removed
    }

    /// Number of users with a non-empty inbox
    pub fn inbox_count(&self) -> usize {
        self.messages.transact(|table| table.index.len())
    }
}
