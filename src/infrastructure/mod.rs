// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod discord_notifier;
pub mod http_response;
pub mod influx_repository;
pub mod memory_repository;
