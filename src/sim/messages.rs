//! Transient on-screen notices

use serde::{Deserialize, Serialize};

/// Default lifetime for a notice (2 seconds)
pub const DEFAULT_TTL: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Ticks left on screen
    pub ttl: u32,
}

/// Insertion-ordered notices that expire on their own
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageQueue {
    messages: Vec<Message>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, text: impl Into<String>, ttl: u32) {
        self.messages.push(Message {
            text: text.into(),
            ttl,
        });
    }

    /// Age every notice by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for msg in &mut self.messages {
            msg.ttl = msg.ttl.saturating_sub(1);
        }
        self.messages.retain(|m| m.ttl > 0);
    }

    /// The first `n` notices, oldest first
    pub fn visible(&self, n: usize) -> &[Message] {
        &self.messages[..n.min(self.messages.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Most recent notice, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
