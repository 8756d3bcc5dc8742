//! OctoPrint REST client.
//!
//! Covers the three endpoints the printer accessory needs: printer status,
//! job progress and job control. Requests carry the `X-Api-Key` header.

mod api;
mod models;
mod request;


pub use api::{JOB_PATH, PRINTER_PATH, PrinterApi};
pub use models::{
    JobCommand, JobCommandRequest, JobProgress, JobResponse, PrinterFlags, PrinterState,
    PrinterStateResponse,
};
pub use request::{OctoPrintClient, parse_server};

/// Server used when the accessory config does not name one.
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Errors that can occur while talking to OctoPrint.
#[derive(Debug, thiserror::Error)]
pub enum OctoPrintError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OctoPrint API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Unsupported server URL: {0}")]
    InvalidServer(String),

    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
}

pub type Result<T> = std::result::Result<T, OctoPrintError>;
