//! HTTP handlers for acr-ui

pub mod compose;
pub mod health;
pub mod ui;

pub use compose::compose_review;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index, serve_style_css};
