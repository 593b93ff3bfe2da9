// Presentation layer - HTTP handlers and page templates
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod style;
