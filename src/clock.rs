use async_trait::async_trait;
use std::time::Duration;

/// Timer seam for scheduled work such as toast dismissal.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Backed by `tokio::time`, so a paused test runtime drives it too.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
