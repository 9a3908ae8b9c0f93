pub mod app;
pub mod config;
pub mod layer;
pub mod list_panel;
pub mod locator;
pub mod view;
