//! Environment-based configuration for both ACR services
//!
//! Configuration is environment variables only: sensible compiled
//! defaults, each overridable by one variable. The one value without a
//! default is the Gemini API key - the API service refuses to start
//! without it rather than failing on the first review.

use crate::error::{Error, Result};

/// Default listen port for acr-api
pub const DEFAULT_API_PORT: u16 = 5880;
/// Default listen port for acr-ui
pub const DEFAULT_UI_PORT: u16 = 5881;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the acr-api service
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen port
    pub port: u16,
    /// Origins allowed to call the API (credentials enabled, so the list
    /// must be explicit - never a wildcard)
    pub allowed_origins: Vec<String>,
    /// Gemini API key (required)
    pub gemini_api_key: String,
    /// Gemini REST API base URL
    pub gemini_api_base: String,
    /// Model name sent to generateContent
    pub gemini_model: String,
}

impl ApiConfig {
    /// Load from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Config("GEMINI_API_KEY is not set".to_string()))?;
        if gemini_api_key.trim().is_empty() {
            return Err(Error::Config("GEMINI_API_KEY is empty".to_string()));
        }

        Ok(Self {
            port: env_port("ACR_API_PORT", DEFAULT_API_PORT),
            allowed_origins: env_origins("ACR_ALLOWED_ORIGINS", DEFAULT_UI_PORT),
            gemini_api_key,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }
}

/// Configuration for the acr-ui service
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Listen port
    pub port: u16,
    /// Base URL of the API service, substituted into the served page so
    /// the browser knows where to send review requests
    pub api_url: String,
}

impl UiConfig {
    /// Load from environment variables; all values have defaults.
    pub fn from_env() -> Self {
        Self {
            port: env_port("ACR_UI_PORT", DEFAULT_UI_PORT),
            api_url: env_or(
                "ACR_API_URL",
                &format!("http://127.0.0.1:{}", DEFAULT_API_PORT),
            ),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_port(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Comma-separated origin list; defaults to the local UI origins.
fn env_origins(name: &str, ui_port: u16) -> Vec<String> {
    match std::env::var(name) {
        Ok(value) => parse_origins(&value),
        Err(_) => vec![
            format!("http://127.0.0.1:{ui_port}"),
            format!("http://localhost:{ui_port}"),
        ],
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
