//! One-shot user notices
//!
//! Bulk moves that are clamped or skipped report a notice instead of an
//! error. Notices queue up until the next list fetch drains them.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Warning,
}

/// A queued user-visible notice
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// FIFO notice queue, drained by list fetches
#[derive(Debug, Default)]
pub struct MessageStore {
    queue: Mutex<Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an informational notice
    pub fn push_info(&self, text: impl Into<String>) {
        self.push(MessageLevel::Info, text);
    }

    pub fn push(&self, level: MessageLevel, text: impl Into<String>) {
        let message = Message {
            level,
            text: text.into(),
            created_at: Utc::now(),
        };
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(message);
        }
    }

    /// Take every queued notice, leaving the queue empty
    pub fn drain(&self) -> Vec<Message> {
        match self.queue.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
