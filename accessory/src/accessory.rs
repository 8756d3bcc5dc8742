//! Accessory assembly: information service values plus a bridge wired to
//! an OctoPrint client and an in-memory characteristic store.

use std::sync::Arc;

use octoprint_client::{OctoPrintClient, OctoPrintError, PrinterApi};

use crate::bridge::PrinterBridge;
use crate::characteristics::CharacteristicStore;
use crate::config::AccessoryConfig;

pub const MANUFACTURER: &str = "Guy Sheffer and the Community";
pub const MODEL: &str = "OctoPrint";

/// Values for the host's accessory information service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub name: String,
}

/// A light-bulb accessory backed by one printer.
pub struct PrinterAccessory<P = OctoPrintClient> {
    information: AccessoryInformation,
    characteristics: Arc<CharacteristicStore>,
    bridge: PrinterBridge<P, CharacteristicStore>,
}

impl PrinterAccessory<OctoPrintClient> {
    /// Build an accessory talking to the configured OctoPrint server.
    pub fn from_config(config: AccessoryConfig) -> Result<Self, OctoPrintError> {
        let client = OctoPrintClient::new(&config.server_url, &config.api_key)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }
}

impl<P: PrinterApi> PrinterAccessory<P> {
    pub fn with_api(config: AccessoryConfig, api: Arc<P>) -> Self {
        tracing::info!(server = %config.server_url, "Initialized OctoPrint accessory at {}", config.server_url);

        let information = AccessoryInformation {
            manufacturer: MANUFACTURER,
            model: MODEL,
            name: config.name.clone(),
        };
        let characteristics = Arc::new(CharacteristicStore::new());
        let bridge = PrinterBridge::new(config, api, Arc::clone(&characteristics));

        Self {
            information,
            characteristics,
            bridge,
        }
    }

    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    pub fn characteristics(&self) -> &Arc<CharacteristicStore> {
        &self.characteristics
    }

    pub fn bridge(&self) -> &PrinterBridge<P, CharacteristicStore> {
        &self.bridge
    }
}
