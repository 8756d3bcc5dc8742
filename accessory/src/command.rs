//! Interpretation of characteristic writes as printer commands.
//!
//! The accessory only has two generic controls, so meaning is overloaded:
//! switching `on` off pauses, switching it on resumes, and sliding
//! `brightness` to full cancels. No write maps to "go idle" directly.

use octoprint_client::JobCommand;

/// Brightness value that is read as a cancel gesture.
pub const CANCEL_LEVEL: u8 = 100;

/// A host write to one of the two characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacteristicWrite {
    On(bool),
    Brightness(u8),
}

/// What a write asks of the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Pause,
    Resume,
    Cancel,
    /// A brightness value other than [`CANCEL_LEVEL`]; progress cannot be set.
    SetRaw(u8),
}

impl HostCommand {
    pub fn from_write(write: CharacteristicWrite) -> Self {
        match write {
            CharacteristicWrite::On(true) => Self::Resume,
            CharacteristicWrite::On(false) => Self::Pause,
            CharacteristicWrite::Brightness(CANCEL_LEVEL) => Self::Cancel,
            CharacteristicWrite::Brightness(level) => Self::SetRaw(level),
        }
    }

    /// The job command to send, or the raw level for writes that carry none.
    pub fn job_command(self) -> Result<JobCommand, u8> {
        match self {
            Self::Pause => Ok(JobCommand::Pause),
            Self::Resume => Ok(JobCommand::Resume),
            Self::Cancel => Ok(JobCommand::Cancel),
            Self::SetRaw(level) => Err(level),
        }
    }
}
