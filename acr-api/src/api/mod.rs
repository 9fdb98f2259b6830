//! HTTP API handlers for acr-api

pub mod buildinfo;
pub mod health;
pub mod review;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use review::get_review;
