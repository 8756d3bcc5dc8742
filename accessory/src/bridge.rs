//! State bridge between the printer and the two host characteristics.
//!
//! Reads go straight to the printer on every call. Writes are interpreted
//! as job commands (see [`crate::command`]), gated by config, and always
//! followed by a resync so the host ends up showing the printer's state
//! rather than its own optimistic value.


use std::sync::Arc;

use octoprint_client::{JobCommand, OctoPrintError, PrinterApi};

use crate::characteristics::Characteristics;
use crate::command::{CharacteristicWrite, HostCommand};
use crate::config::AccessoryConfig;
use crate::refresh::{RefreshScheduler, ResyncMode};
use crate::status;

/// A characteristic write the host should treat as failed.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("job command failed: {0}")]
    Command(#[from] OctoPrintError),

    #[error("progress cannot be set to {0}")]
    UnsupportedProgress(u8),
}

/// How a single write is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePlan {
    /// The feature is turned off in config. Nothing is sent and the write
    /// reports success; the resync puts the real value back.
    Disabled,
    /// Send `command`, then resync. Failures reach the host only when
    /// `report_failure` is set.
    Send {
        command: JobCommand,
        resync: ResyncMode,
        report_failure: bool,
    },
    /// Not a command. Resync and report failure so the host reverts.
    Reject(u8),
}

impl WritePlan {
    pub fn for_write(config: &AccessoryConfig, write: CharacteristicWrite) -> Self {
        let allowed = match write {
            CharacteristicWrite::On(_) => config.allow_pause,
            CharacteristicWrite::Brightness(_) => config.allow_cancel,
        };
        if !allowed {
            return Self::Disabled;
        }

        match HostCommand::from_write(write).job_command() {
            Err(level) => Self::Reject(level),
            // A failed cancel is not surfaced so the host does not get
            // stuck showing an error on the slider.
            Ok(command @ JobCommand::Cancel) => Self::Send {
                command,
                resync: ResyncMode::Delayed,
                report_failure: false,
            },
            Ok(command) => Self::Send {
                command,
                resync: ResyncMode::Immediate,
                report_failure: true,
            },
        }
    }
}

pub struct PrinterBridge<P, C> {
    config: AccessoryConfig,
    api: Arc<P>,
    refresh: RefreshScheduler<P, C>,
}

impl<P: PrinterApi, C: Characteristics> PrinterBridge<P, C> {
    pub fn new(config: AccessoryConfig, api: Arc<P>, characteristics: Arc<C>) -> Self {
        let refresh = RefreshScheduler::new(Arc::clone(&api), characteristics);
        Self {
            config,
            api,
            refresh,
        }
    }

    pub fn config(&self) -> &AccessoryConfig {
        &self.config
    }

    pub fn refresh(&self) -> &RefreshScheduler<P, C> {
        &self.refresh
    }

    /// `on` read: whether the printer is printing right now.
    pub async fn get_printing_state(&self) -> bool {
        status::fetch_printing_state(self.api.as_ref()).await
    }

    /// `on` write: `false` pauses, `true` resumes.
    pub async fn set_printing_state(&self, on: bool) -> Result<(), WriteError> {
        self.write(CharacteristicWrite::On(on)).await
    }

    /// `brightness` read: completion percent, 0 without an active job.
    pub async fn get_progress(&self) -> u8 {
        status::fetch_job_progress(self.api.as_ref())
            .await
            .unwrap_or(0)
    }

    /// `brightness` write: 100 cancels, anything else is rejected.
    pub async fn set_progress(&self, level: u8) -> Result<(), WriteError> {
        tracing::debug!(level, "Setting value to {level}");
        self.write(CharacteristicWrite::Brightness(level)).await
    }

    pub async fn write(&self, write: CharacteristicWrite) -> Result<(), WriteError> {
        match WritePlan::for_write(&self.config, write) {
            WritePlan::Disabled => {
                match write {
                    CharacteristicWrite::On(_) => tracing::info!("Pausing disabled."),
                    CharacteristicWrite::Brightness(_) => tracing::info!("Canceling disabled."),
                }
                self.refresh.trigger(ResyncMode::Immediate).await;
                Ok(())
            }
            WritePlan::Send {
                command,
                resync,
                report_failure,
            } => {
                match command {
                    JobCommand::Pause => tracing::info!("Pausing print."),
                    JobCommand::Resume => tracing::info!("Resuming print."),
                    JobCommand::Cancel => tracing::info!("Cancelling print."),
                }
                let outcome = status::send_job_command(self.api.as_ref(), command).await;
                self.refresh.trigger(resync).await;

                match outcome {
                    Err(e) if report_failure => Err(WriteError::Command(e)),
                    Err(e) => {
                        tracing::warn!(%command, "Ignoring failed {command}: {e}");
                        Ok(())
                    }
                    Ok(()) => Ok(()),
                }
            }
            WritePlan::Reject(level) => {
                tracing::warn!(level, "Cannot set custom progress!");
                self.refresh.trigger(ResyncMode::Immediate).await;
                Err(WriteError::UnsupportedProgress(level))
            }
        }
    }
}
