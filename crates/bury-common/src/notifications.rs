use std::collections::VecDeque;

/// Message log, bounded like the `*Messages*` buffer.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<String>,
    capacity: usize,
    pushed: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            pushed: 0,
        }
    }

    /// Appends a message, dropping the oldest one when full.
    pub fn push(&mut self, message: impl Into<String>) {
        self.pushed += 1;
        if self.capacity == 0 {
            return;
        }
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(message.into());
    }

    pub fn latest(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    /// Logged messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Messages pushed over the queue's lifetime, including dropped ones.
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(64)
    }
}
