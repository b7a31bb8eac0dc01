use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::config::NotificationConfig;
use crate::types::{Notification, NotificationKind};

/// Owns the site-wide toast queue. Every entry expires on its own schedule;
/// nothing outside this type mutates the queue.
pub struct NotificationCenter {
    queue: Arc<RwLock<VecDeque<Notification>>>,
    tx: broadcast::Sender<Notification>,
    next_id: AtomicU64,
    ttl: chrono::Duration,
    capacity: usize,
}

impl NotificationCenter {
    pub fn new(ttl: Duration, capacity: usize, channel_capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(channel_capacity.max(1));
        Self {
            queue: Arc::new(RwLock::new(VecDeque::new())),
            tx,
            next_id: AtomicU64::new(1),
            ttl: chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(365)),
            capacity: capacity.max(1),
        }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self::new(
            Duration::from_millis(config.ttl_ms),
            config.capacity,
            config.channel_capacity,
        )
    }

    /// Push one of the canned notifications
    pub async fn notify(&self, kind: NotificationKind) -> Notification {
        let (title, description) = kind.canned_text();
        self.push(kind, title, description).await
    }

    pub async fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Notification {
        let now = Utc::now();
        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            title: title.into(),
            description: description.into(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        {
            let mut queue = self.queue.write().await;
            queue.push_back(notification.clone());
            while queue.len() > self.capacity {
                queue.pop_front();
            }
        }

        debug!("Notification #{} queued: {}", notification.id, notification.title);

        // No subscribers is fine
        let _ = self.tx.send(notification.clone());

        notification
    }

    /// Unexpired notifications, oldest first
    pub async fn active(&self) -> Vec<Notification> {
        let now = Utc::now();
        self.queue
            .read()
            .await
            .iter()
            .filter(|n| !n.is_expired_at(now))
            .cloned()
            .collect()
    }

    pub async fn dismiss(&self, id: u64) -> bool {
        let mut queue = self.queue.write().await;
        let before = queue.len();
        queue.retain(|n| n.id != id);
        queue.len() != before
    }

    /// Drop expired entries, returning how many were removed
    pub async fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut queue = self.queue.write().await;
        let before = queue.len();
        queue.retain(|n| !n.is_expired_at(now));
        let removed = before - queue.len();
        if removed > 0 {
            debug!("Swept {} expired notification(s)", removed);
        }
        removed
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), 16, 100)
    }
}
