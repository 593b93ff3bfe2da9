// Repository trait for sample persistence
use crate::domain::sample::Sample;
use async_trait::async_trait;

#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Persist one sample
    async fn append(&self, sample: &Sample) -> anyhow::Result<()>;

    /// Full stored history, ordered ascending by timestamp
    async fn history(&self) -> anyhow::Result<Vec<Sample>>;
}
