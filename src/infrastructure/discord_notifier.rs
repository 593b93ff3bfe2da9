// Discord webhook notifier
use crate::application::notifier::Notifier;
use crate::domain::sample::Sample;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::SecondsFormat;
use serde::Serialize;

const EMBED_TITLE: &str = "Weather Report";
const EMBED_COLOR: u32 = 0x57965c;

#[derive(Debug, Serialize, PartialEq)]
struct WebhookMessage {
    content: String,
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    timestamp: String,
}

#[derive(Debug, Clone)]
pub struct DiscordNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }
}

fn weather_message(sample: &Sample) -> WebhookMessage {
    let description = format!(
        "**Temperature:** {} °C\n**Air Pressure:** {} Pa\n**Light Level:** {} Lux",
        sample.temperature, sample.pressure, sample.light_level
    );

    WebhookMessage {
        content: String::new(),
        embeds: vec![Embed {
            title: EMBED_TITLE.to_string(),
            description,
            color: EMBED_COLOR,
            timestamp: sample.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }],
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, sample: &Sample) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&weather_message(sample))
            .send()
            .await
            .context("Failed to send webhook request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Webhook rejected message with status {}: {}", status, body);
        }

        tracing::debug!("Webhook notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_weather_message_json() {
        let sample = Sample::new(
            21.5,
            101325.0,
            340.25,
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        );

        let json = serde_json::to_value(weather_message(&sample)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "content": "",
                "embeds": [{
                    "title": "Weather Report",
                    "description": "**Temperature:** 21.5 °C\n**Air Pressure:** 101325 Pa\n**Light Level:** 340.25 Lux",
                    "color": 5740124,
                    "timestamp": "2023-11-14T22:13:20.000Z"
                }]
            })
        );
    }
}
