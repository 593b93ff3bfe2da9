// InfluxDB repository implementation
use crate::application::sample_repository::SampleRepository;
use crate::domain::sample::Sample;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

const MEASUREMENT: &str = "weather";

#[derive(Debug, Clone)]
pub struct InfluxRepository {
    client: reqwest::Client,
    host: String,
    token: String,
    database: String,
    retention_policy: String,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResponse {
    results: Vec<InfluxQLResult>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResult {
    #[serde(default)]
    series: Option<Vec<InfluxQLSeries>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLSeries {
    columns: Vec<String>,
    values: Vec<Vec<serde_json::Value>>,
}

impl InfluxRepository {
    pub fn new(host: String, token: String, database: String, retention_policy: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            host: host.trim_end_matches('/').to_string(),
            token,
            database,
            retention_policy,
        }
    }

    fn build_query_url(&self, query: &str) -> String {
        format!(
            "{}/query?db={}&rp={}&q={}",
            self.host,
            urlencoding::encode(&self.database),
            urlencoding::encode(&self.retention_policy),
            urlencoding::encode(query)
        )
    }

    fn build_write_url(&self) -> String {
        format!(
            "{}/write?db={}&rp={}&precision=ms",
            self.host,
            urlencoding::encode(&self.database),
            urlencoding::encode(&self.retention_policy)
        )
    }

    async fn execute_query(&self, query: &str) -> Result<InfluxQLResponse> {
        let url = self.build_query_url(query);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to InfluxDB")?;

        let data = ensure_success(response, "query")
            .await?
            .json::<InfluxQLResponse>()
            .await
            .context("Failed to parse InfluxDB response")?;

        if let Some(result) = data.results.first() {
            if let Some(error) = &result.error {
                anyhow::bail!("InfluxDB query error: {}", error);
            }
        }

        Ok(data)
    }
}

/// Turn a non-2xx reply into an error carrying InfluxDB's message
async fn ensure_success(response: reqwest::Response, operation: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("InfluxDB {} failed with status {}: {}", operation, status, body)
}

/// Line protocol record for one sample, timestamped in milliseconds
fn line_protocol(sample: &Sample) -> String {
    format!(
        "{} temperature={},pressure={},light_level={} {}",
        MEASUREMENT,
        sample.temperature,
        sample.pressure,
        sample.light_level,
        sample.timestamp.timestamp_millis()
    )
}

/// Rows with missing fields or unreadable times are skipped.
fn samples_from_response(response: &InfluxQLResponse) -> Vec<Sample> {
    let mut samples = Vec::new();

    let Some(series) = response.results.first().and_then(|r| r.series.as_ref()) else {
        return samples;
    };

    for s in series {
        let column = |name: &str| s.columns.iter().position(|c| c == name);
        let (Some(time_idx), Some(temp_idx), Some(pressure_idx), Some(light_idx)) = (
            column("time"),
            column("temperature"),
            column("pressure"),
            column("light_level"),
        ) else {
            tracing::warn!("Skipping series with columns {:?}", s.columns);
            continue;
        };

        for row in &s.values {
            let field = |idx: usize| row.get(idx).and_then(|v| v.as_f64());
            let timestamp = row
                .get(time_idx)
                .and_then(|v| v.as_str())
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .map(|t| t.with_timezone(&Utc));

            if let (Some(timestamp), Some(temperature), Some(pressure), Some(light_level)) = (
                timestamp,
                field(temp_idx),
                field(pressure_idx),
                field(light_idx),
            ) {
                samples.push(Sample::new(temperature, pressure, light_level, timestamp));
            }
        }
    }

    samples.sort_by_key(|s| s.timestamp);
    samples
}

#[async_trait]
impl SampleRepository for InfluxRepository {
    async fn append(&self, sample: &Sample) -> Result<()> {
        let response = self
            .client
            .post(self.build_write_url())
            .header("Authorization", format!("Token {}", self.token))
            .body(line_protocol(sample))
            .send()
            .await
            .context("Failed to send write to InfluxDB")?;

        ensure_success(response, "write").await?;
        Ok(())
    }

    async fn history(&self) -> Result<Vec<Sample>> {
        let query = format!(
            "SELECT temperature, pressure, light_level FROM {} ORDER BY time ASC",
            MEASUREMENT
        );

        tracing::debug!("Executing history query: {}", query);
        let response = self.execute_query(&query).await?;
        let samples = samples_from_response(&response);

        tracing::debug!("Loaded {} samples from InfluxDB", samples.len());
        Ok(samples)
    }
}
