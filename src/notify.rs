//! Notification channel: presented notifications wait in FIFO order and
//! the front one is the visible modal.

use std::collections::VecDeque;

use crate::dispatch::Notification;
use crate::logging::{self, UiEvent};

#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: VecDeque<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present(&mut self, notification: Notification) {
        self.queue.push_back(notification);
        if let Some(last) = self.queue.back() {
            logging::record(&UiEvent::NotificationPresented {
                title: &last.title,
                queued: self.queue.len(),
            });
        }
    }

    /// The notification currently on screen.
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Close the visible notification and reveal the next one, if any.
    pub fn dismiss(&mut self) -> Option<Notification> {
        let dismissed = self.queue.pop_front()?;
        logging::record(&UiEvent::NotificationDismissed {
            title: &dismissed.title,
            remaining: self.queue.len(),
        });
        Some(dismissed)
    }

    /// Notifications waiting behind the visible one.
    pub fn pending(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
