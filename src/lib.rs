pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod stories;
pub mod ui;
