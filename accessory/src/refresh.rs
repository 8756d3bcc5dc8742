//! Resync of the exposed characteristics from the printer.

use std::sync::Arc;
use std::time::Duration;

use octoprint_client::PrinterApi;
use tokio::task::JoinHandle;

use crate::characteristics::{Characteristics, ExposedCharacteristics};
use crate::status;

/// Wait before re-reading after a cancel. OctoPrint does not always report
/// the transition to idle on the very next poll; this is a heuristic, not a
/// device timing guarantee.
pub const SETTLE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResyncMode {
    /// Re-read before the triggering write completes.
    Immediate,
    /// Re-read once after [`SETTLE_DELAY`], detached from the write.
    Delayed,
}

/// Pushes freshly observed printer state onto the characteristics.
pub struct RefreshScheduler<P, C> {
    api: Arc<P>,
    characteristics: Arc<C>,
}

impl<P, C> Clone for RefreshScheduler<P, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            characteristics: Arc::clone(&self.characteristics),
        }
    }
}

impl<P: PrinterApi, C: Characteristics> RefreshScheduler<P, C> {
    pub fn new(api: Arc<P>, characteristics: Arc<C>) -> Self {
        Self {
            api,
            characteristics,
        }
    }

    /// Re-read both axes and overwrite the characteristics.
    ///
    /// Failed reads push the idle projection; this never fails.
    pub async fn resync(&self) -> ExposedCharacteristics {
        let (printing, completion) = tokio::join!(
            status::fetch_printing_state(self.api.as_ref()),
            status::fetch_job_progress(self.api.as_ref()),
        );

        let observed = ExposedCharacteristics::observed(printing, completion);
        self.characteristics.set_on(observed.on);
        self.characteristics.set_brightness(observed.brightness);
        tracing::debug!(
            on = observed.on,
            brightness = observed.brightness,
            "Characteristics resynced"
        );
        observed
    }

    /// Spawn a resync that runs after [`SETTLE_DELAY`].
    ///
    /// The task has no cancellation path; overlapping resyncs are harmless
    /// because each one only overwrites with fresh reads.
    pub fn resync_later(&self) -> JoinHandle<ExposedCharacteristics> {
        let scheduler = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            scheduler.resync().await
        })
    }

    pub async fn trigger(&self, mode: ResyncMode) {
        match mode {
            ResyncMode::Immediate => {
                self.resync().await;
            }
            ResyncMode::Delayed => {
                // Fire and forget.
                let _ = self.resync_later();
            }
        }
    }
}
