use std::collections::HashMap;
use std::time::Duration;

use tokio::task::{self, AbortHandle};

use super::{Category, Notification, NotificationError, NotificationId};
use crate::event::input::{AppEvent, EventSender};

/// Insertion ordered notifications, oldest first.
///
/// Each notification with a lifetime gets its own timer task. When the
/// timer fires it posts [`AppEvent::NotificationExpired`] to the event loop,
/// which removes the notification through [`NotificationQueue::dismiss`],
/// the same path used for manual dismissal. Dismissing aborts the timer.
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    timers: HashMap<NotificationId, AbortHandle>,
    next_id: u64,
    sender: EventSender,
}

impl NotificationQueue {
    pub fn new(sender: EventSender) -> Self {
        Self {
            notifications: Vec::new(),
            timers: HashMap::new(),
            next_id: 1,
            sender,
        }
    }

    /// Append a notification. A zero or absent lifetime makes it sticky.
    pub fn enqueue(
        &mut self,
        message: impl Into<String>,
        category: Category,
        lifetime: Option<Duration>,
    ) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, message.into(), category, lifetime);
        log::debug!(
            "enqueue {} [{}] {:?}: {}",
            id,
            category,
            notification.lifetime,
            notification.message
        );

        if let Some(lifetime) = notification.lifetime {
            self.timers.insert(id, self.schedule_expiry(id, lifetime));
        }
        self.notifications.push(notification);

        id
    }

    /// Like [`NotificationQueue::enqueue`] with the category given by name.
    /// Nothing is added when the name is not a known category.
    pub fn enqueue_named(
        &mut self,
        message: impl Into<String>,
        category: &str,
        lifetime: Option<Duration>,
    ) -> Result<NotificationId, NotificationError> {
        let category = category.parse::<Category>()?;
        Ok(self.enqueue(message, category, lifetime))
    }

    pub fn success(&mut self, message: impl Into<String>, lifetime: Option<Duration>) -> NotificationId {
        self.enqueue(message, Category::Success, lifetime)
    }

    pub fn error(&mut self, message: impl Into<String>, lifetime: Option<Duration>) -> NotificationId {
        self.enqueue(message, Category::Error, lifetime)
    }

    pub fn info(&mut self, message: impl Into<String>, lifetime: Option<Duration>) -> NotificationId {
        self.enqueue(message, Category::Info, lifetime)
    }

    pub fn warning(&mut self, message: impl Into<String>, lifetime: Option<Duration>) -> NotificationId {
        self.enqueue(message, Category::Warning, lifetime)
    }

    /// Remove the notification and cancel its timer.
    ///
    /// Unknown ids, including ones that already expired, are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        if let Some(timer) = self.timers.remove(&id) {
            timer.abort();
        }

        let position = self.position(id)?;
        log::debug!("dismiss {}", id);
        Some(self.notifications.remove(position))
    }

    pub fn clear(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
        self.notifications.clear();
    }

    pub fn snapshot(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn position(&self, id: NotificationId) -> Option<usize> {
        self.notifications.iter().position(|n| n.id == id)
    }

    #[cfg(test)]
    pub fn has_timer(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    fn schedule_expiry(&self, id: NotificationId, lifetime: Duration) -> AbortHandle {
        let sender = self.sender.clone();
        task::spawn(async move {
            tokio::time::sleep(lifetime).await;
            log::trace!("expire {}", id);
            if sender.send(AppEvent::NotificationExpired(id)).await.is_err() {
                log::debug!("event loop closed before {} expired", id);
            }
        })
        .abort_handle()
    }
}

impl Drop for NotificationQueue {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}
