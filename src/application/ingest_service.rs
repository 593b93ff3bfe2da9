// Ingest service - Use case for recording a new sample
use crate::application::notifier::Notifier;
use crate::application::sample_repository::SampleRepository;
use crate::domain::sample::{Sample, SampleError, SampleInput};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid sample: {0}")]
    Invalid(#[from] SampleError),
    #[error("failed to store sample: {0:#}")]
    Storage(anyhow::Error),
}

#[derive(Clone)]
pub struct IngestService {
    repository: Arc<dyn SampleRepository>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl IngestService {
    pub fn new(repository: Arc<dyn SampleRepository>, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Stamp, persist and forward one reading.
    ///
    /// The sample counts as recorded once it is stored; a failed notification
    /// is only logged.
    pub async fn record(&self, input: SampleInput) -> Result<Sample, IngestError> {
        let sample = input.into_sample(Utc::now())?;

        self.repository
            .append(&sample)
            .await
            .map_err(IngestError::Storage)?;

        tracing::info!(
            temperature = sample.temperature,
            pressure = sample.pressure,
            light_level = sample.light_level,
            "Recorded sample"
        );

        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(&sample).await {
                tracing::warn!("Failed to send notification: {:#}", e);
            }
        }

        Ok(sample)
    }
}
