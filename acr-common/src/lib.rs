//! Shared library for the ACR (AI Code Reviewer) microservices
//!
//! Holds everything both services agree on:
//! - The review text model: `Verdict` classification and `Section` splitting
//! - Fenced code block extraction for copyable snippets
//! - Environment-based configuration for both services
//! - Common error types
//!
//! The parsing functions here are deliberately tolerant: the review text
//! comes from an external model, and format drift must degrade to an
//! Unknown verdict or a shorter section list, never to an error.

pub mod config;
pub mod error;
pub mod sections;
pub mod snippet;
pub mod verdict;

pub use config::{ApiConfig, UiConfig};
pub use error::{Error, Result};
pub use sections::{parse_sections, title_matches, Section};
pub use snippet::first_fenced_block;
pub use verdict::{extract_verdict, Verdict};
