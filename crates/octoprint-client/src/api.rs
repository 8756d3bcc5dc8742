use std::future::Future;

use crate::models::{JobCommand, JobCommandRequest, JobResponse, PrinterStateResponse};
use crate::{OctoPrintClient, Result};

pub const PRINTER_PATH: &str = "/api/printer";
pub const JOB_PATH: &str = "/api/job";

/// The subset of the OctoPrint API the accessory depends on.
///
/// Implemented by [`OctoPrintClient`]; tests substitute an in-memory device.
pub trait PrinterApi: Send + Sync + 'static {
    /// Base URL, used for diagnostics only.
    fn server(&self) -> &str;

    /// `GET /api/printer`.
    fn printer_state(&self) -> impl Future<Output = Result<PrinterStateResponse>> + Send;

    /// `GET /api/job`.
    fn job(&self) -> impl Future<Output = Result<JobResponse>> + Send;

    /// `POST /api/job` with `{"command": ...}`.
    fn job_command(&self, command: JobCommand) -> impl Future<Output = Result<()>> + Send;
}

impl PrinterApi for OctoPrintClient {
    fn server(&self) -> &str {
        OctoPrintClient::server(self)
    }

    async fn printer_state(&self) -> Result<PrinterStateResponse> {
        let body = self.get(PRINTER_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn job(&self) -> Result<JobResponse> {
        let body = self.get(JOB_PATH).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn job_command(&self, command: JobCommand) -> Result<()> {
        self.post_json(JOB_PATH, &JobCommandRequest { command })
            .await
    }
}
