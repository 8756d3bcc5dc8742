//! Fail-safe printer observations.
//!
//! A failed read is a definitive "idle, no job" observation. Nothing here
//! retries or returns an error to the caller.

use octoprint_client::{JOB_PATH, JobCommand, OctoPrintError, PRINTER_PATH, PrinterApi};

/// Whether the printer is printing. Any failure reads as `false`.
pub async fn fetch_printing_state<P: PrinterApi>(api: &P) -> bool {
    let url = format!("{}{PRINTER_PATH}", api.server());
    tracing::debug!(url, "Getting current printing state");

    match api.printer_state().await {
        Ok(state) => {
            let printing = state.is_printing();
            tracing::debug!(url, printing, "Printer is printing: {printing}");
            printing
        }
        Err(e) => {
            tracing::warn!(url, "Error getting printing state, assuming not printing: {e}");
            false
        }
    }
}

/// Job completion in percent, `None` when no job is active or the read failed.
pub async fn fetch_job_progress<P: PrinterApi>(api: &P) -> Option<u8> {
    let url = format!("{}{JOB_PATH}", api.server());
    tracing::debug!(url, "Getting current job data");

    match api.job().await {
        Ok(job) => {
            let completion = job.completion_percent();
            match completion {
                Some(percent) => tracing::debug!(url, completion = percent, "Current completion"),
                None => tracing::debug!(url, "Printer currently not printing"),
            }
            completion
        }
        Err(e) => {
            tracing::warn!(url, "Error getting printing progress, assuming not printing: {e}");
            None
        }
    }
}

/// Send a job command once. The outcome is returned, never retried.
pub async fn send_job_command<P: PrinterApi>(
    api: &P,
    command: JobCommand,
) -> Result<(), OctoPrintError> {
    match api.job_command(command).await {
        Ok(()) => {
            tracing::info!(%command, "Job command accepted");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(%command, "Job command failed: {e}");
            Err(e)
        }
    }
}
