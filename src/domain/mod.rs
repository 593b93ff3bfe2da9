// Domain layer - Sensor samples and chart geometry
pub mod chart;
pub mod report;
pub mod sample;
