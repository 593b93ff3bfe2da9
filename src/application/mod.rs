// Application layer - Use cases and the chart pipeline
pub mod chart_renderer;
pub mod ingest_service;
pub mod markup;
pub mod normalizer;
pub mod notifier;
pub mod report_service;
pub mod sample_repository;
