use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub chart: ChartSettings,
    pub influx: Option<InfluxSettings>,
    pub webhook: Option<WebhookSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxSettings {
    pub host: String,
    pub token: String,
    pub database: String,
    pub retention_policy: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookSettings {
    pub url: String,
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("chart.width", 400.0)?
        .set_default("chart.height", 150.0)?)
}

/// Load `config/weather.*` (optional) overlaid by `WEATHER__SECTION__KEY` variables
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/weather").required(false))
        .add_source(config::Environment::with_prefix("WEATHER").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config: AppConfig = builder().unwrap().build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.chart.width, 400.0);
        assert_eq!(config.chart.height, 150.0);
        assert!(config.influx.is_none());
        assert!(config.webhook.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [chart]
            width = 600.0

            [influx]
            host = "http://localhost:8086"
            token = "secret"
            database = "weather"
            retention_policy = "autogen"

            [webhook]
            url = "https://example.com/hook"
        "#;

        let config: AppConfig = builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.chart.width, 600.0);
        assert_eq!(config.chart.height, 150.0);
        assert_eq!(config.influx.unwrap().database, "weather");
        assert_eq!(config.webhook.unwrap().url, "https://example.com/hook");
    }
}
