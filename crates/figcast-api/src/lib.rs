//! Figma REST client
//!
//! The external collaborator boundary: given a file key and token,
//! fetch the JSON node tree and resolve image URLs. Upstream failures
//! (non-2xx, or an `err` field in a 200 body) surface as [`ApiError`];
//! partial asset failures are logged and skipped so one broken image
//! never sinks a generation pass.

pub mod client;
pub mod images;

pub use client::{parse_file_key, FigmaClient, FigmaFile};
pub use images::{collect_image_ids, download_images};

/// Errors from the Figma API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Figma API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Figma API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Figma API reported an error: {0}")]
    Upstream(String),
}
