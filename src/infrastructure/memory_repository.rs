// In-process repository implementation
use crate::application::sample_repository::SampleRepository;
use crate::domain::sample::Sample;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps samples in memory, sorted by timestamp. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    samples: RwLock<Vec<Sample>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SampleRepository for InMemoryRepository {
    async fn append(&self, sample: &Sample) -> Result<()> {
        let mut samples = self.samples.write().await;
        // After any samples sharing the timestamp, so arrival order is kept
        let index = samples.partition_point(|s| s.timestamp <= sample.timestamp);
        samples.insert(index, sample.clone());
        Ok(())
    }

    async fn history(&self) -> Result<Vec<Sample>> {
        Ok(self.samples.read().await.clone())
    }
}
