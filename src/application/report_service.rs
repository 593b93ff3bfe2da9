// Report service - Use case for building the chart report page
use crate::application::chart_renderer;
use crate::application::normalizer::normalize;
use crate::application::sample_repository::SampleRepository;
use crate::domain::chart::{Canvas, ChartError};
use crate::domain::report::{ChartBody, ChartSection, ReportPage};
use crate::domain::sample::{Metric, Sample};
use anyhow::Context;
use std::sync::Arc;

const REPORT_TITLE: &str = "Weather Reports";
const NO_DATA: &str = "No data yet.";

#[derive(Clone)]
pub struct ReportService {
    repository: Arc<dyn SampleRepository>,
    canvas: Canvas,
}

impl ReportService {
    pub fn new(repository: Arc<dyn SampleRepository>, canvas: Canvas) -> Self {
        Self { repository, canvas }
    }

    /// Draw every metric from a single snapshot of the history.
    pub async fn build_report(&self) -> anyhow::Result<ReportPage> {
        let history = self
            .repository
            .history()
            .await
            .context("Failed to load sample history")?;

        tracing::debug!("Building report from {} samples", history.len());

        let charts = Metric::ALL
            .iter()
            .map(|&metric| self.chart_section(&history, metric))
            .collect();

        Ok(ReportPage::new(REPORT_TITLE.to_string(), charts))
    }

    fn chart_section(&self, history: &[Sample], metric: Metric) -> ChartSection {
        let body = match normalize(history, metric, self.canvas) {
            Ok(series) => ChartBody::Svg(chart_renderer::render(
                metric.id(),
                metric.title(),
                metric.description(),
                &series,
                self.canvas,
            )),
            Err(ChartError::EmptyHistory) => ChartBody::Unavailable(NO_DATA.to_string()),
            Err(e) => {
                tracing::warn!("Skipping {} chart: {}", metric, e);
                ChartBody::Unavailable(e.to_string())
            }
        };

        ChartSection::new(
            metric.id().to_string(),
            metric.title().to_string(),
            metric.description().to_string(),
            body,
        )
    }
}
