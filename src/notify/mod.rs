mod center;

pub use center::NotificationCenter;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Periodically drop expired notifications
pub fn spawn_sweeper(center: Arc<NotificationCenter>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(every);
        loop {
            interval.tick().await;
            center.sweep().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NotificationKind;

    #[tokio::test]
    async fn test_sweeper_clears_expired_entries() {
        let center = Arc::new(NotificationCenter::new(Duration::from_millis(20), 8, 10));
        center.notify(NotificationKind::Copied).await;

        let handle = spawn_sweeper(Arc::clone(&center), Duration::from_millis(10));
        time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        // sweep already ran, nothing left to remove
        assert_eq!(center.sweep().await, 0);
    }
}
