//! Crate error type.

use thiserror::Error;

/// Failures that escape a scraping run.
///
/// Per-field and per-page problems are handled where they occur; what is
/// left here is session setup and persistence.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// Browser protocol errors (headless_chrome reports through anyhow).
    #[error(transparent)]
    Browser(#[from] anyhow::Error),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
