// Notifier trait for forwarding fresh samples to an external endpoint
use crate::domain::sample::Sample;
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, sample: &Sample) -> anyhow::Result<()>;
}
