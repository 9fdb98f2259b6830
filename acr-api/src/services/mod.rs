//! Services for acr-api

pub mod gemini_client;
pub mod review_service;

pub use gemini_client::{GeminiClient, GeminiError};
pub use review_service::{ReviewOutcome, ReviewService};
