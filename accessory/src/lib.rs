//! OctoPrint printer exposed as a light-bulb accessory.
//!
//! The `on` characteristic mirrors whether the printer is printing and the
//! `brightness` characteristic mirrors job completion. Writes to either are
//! translated into pause, resume and cancel job commands.

pub mod accessory;
pub mod bridge;
pub mod characteristics;
pub mod command;
pub mod config;
pub mod refresh;
pub mod status;

#[cfg(test)]
mod testing;

pub use accessory::{AccessoryInformation, PrinterAccessory};
pub use bridge::{PrinterBridge, WriteError};
pub use characteristics::{CharacteristicStore, Characteristics, ExposedCharacteristics};
pub use command::{CharacteristicWrite, HostCommand};
pub use config::AccessoryConfig;
pub use refresh::{RefreshScheduler, ResyncMode, SETTLE_DELAY};
