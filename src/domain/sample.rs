// Sensor sample domain model
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// One stored sensor reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub temperature: f64,
    pub pressure: f64,
    pub light_level: f64,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(temperature: f64, pressure: f64, light_level: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            temperature,
            pressure,
            light_level,
            timestamp,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Request body posted by the sensor station
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleInput {
    pub temperature: f64,
    pub pressure: f64,
    pub light_level: f64,
}

impl SampleInput {
    pub fn into_sample(self, timestamp: DateTime<Utc>) -> Result<Sample, SampleError> {
        for (field, value) in [
            ("temperature", self.temperature),
            ("pressure", self.pressure),
            ("lightLevel", self.light_level),
        ] {
            if !value.is_finite() {
                return Err(SampleError::NonFinite { field });
            }
        }

        Ok(Sample::new(
            self.temperature,
            self.pressure,
            self.light_level,
            timestamp,
        ))
    }
}

/// Selects which reading of a sample gets plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Pressure,
    LightLevel,
}

impl Metric {
    /// Page order of the report charts
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Pressure, Metric::LightLevel];

    pub fn value(self, sample: &Sample) -> f64 {
        match self {
            Metric::Temperature => sample.temperature,
            Metric::Pressure => sample.pressure,
            Metric::LightLevel => sample.light_level,
        }
    }

    /// Element id used by the stylesheet to color each chart
    pub fn id(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Pressure => "pressure",
            Metric::LightLevel => "light-level",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Temperature => "Graph 1: Temperature",
            Metric::Pressure => "Graph 2: Air Pressure",
            Metric::LightLevel => "Graph 3: Light Level",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature (°C) in function of time.",
            Metric::Pressure => "Air pressure (Pa) in function of time.",
            Metric::LightLevel => "Light level (Lux) in function of time.",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
