pub mod api;
pub mod app;
pub mod config;
pub mod pipeline;
pub mod ui;
