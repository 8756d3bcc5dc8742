//! Response and request bodies for the OctoPrint endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/printer`. Only the fields the accessory reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct PrinterStateResponse {
    pub state: PrinterState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrinterState {
    pub flags: PrinterFlags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrinterFlags {
    #[serde(default)]
    pub printing: Option<bool>,
}

impl PrinterStateResponse {
    /// True only when the device reports `printing: true`.
    pub fn is_printing(&self) -> bool {
        self.state.flags.printing == Some(true)
    }
}

/// Body of `GET /api/job`. Only `progress.completion` is modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub progress: JobProgress,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobProgress {
    /// Percent complete as a float, `null` when no job is loaded.
    #[serde(default)]
    pub completion: Option<f64>,
}

impl JobResponse {
    /// Completion rounded half away from zero and clamped into `0..=100`.
    ///
    /// `None` when the device reports no active job.
    pub fn completion_percent(&self) -> Option<u8> {
        let completion = self.progress.completion?;
        if !completion.is_finite() {
            return None;
        }
        Some(completion.round().clamp(0.0, 100.0) as u8)
    }
}

/// Job control command accepted by `POST /api/job`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobCommand {
    Pause,
    Resume,
    Cancel,
}

impl JobCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for JobCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCommandRequest {
    pub command: JobCommand,
}
