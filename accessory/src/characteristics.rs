//! Host-visible characteristic surface.
//!
//! The bridge never reads these values back as truth; they are a projection
//! of the last observed printer state and may be overwritten at any time.

use tokio::sync::watch;

/// The `{on, brightness}` pair the host displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExposedCharacteristics {
    pub on: bool,
    pub brightness: u8,
}

impl ExposedCharacteristics {
    /// Project an observation. A missing completion means no active job.
    pub fn observed(printing: bool, completion: Option<u8>) -> Self {
        Self {
            on: printing,
            brightness: completion.unwrap_or(0).min(100),
        }
    }
}

/// The host's characteristic registry as seen by the accessory.
pub trait Characteristics: Send + Sync + 'static {
    fn on(&self) -> bool;
    fn set_on(&self, on: bool);
    fn brightness(&self) -> u8;
    fn set_brightness(&self, level: u8);

    fn snapshot(&self) -> ExposedCharacteristics {
        ExposedCharacteristics {
            on: self.on(),
            brightness: self.brightness(),
        }
    }
}

/// In-memory characteristic values with change notification.
#[derive(Debug)]
pub struct CharacteristicStore {
    tx: watch::Sender<ExposedCharacteristics>,
}

impl CharacteristicStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ExposedCharacteristics::default());
        Self { tx }
    }

    /// Receive a notification whenever a value actually changes.
    pub fn subscribe(&self) -> watch::Receiver<ExposedCharacteristics> {
        self.tx.subscribe()
    }
}

impl Default for CharacteristicStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Characteristics for CharacteristicStore {
    fn on(&self) -> bool {
        self.tx.borrow().on
    }

    fn set_on(&self, on: bool) {
        self.tx.send_if_modified(|current| {
            let changed = current.on != on;
            current.on = on;
            changed
        });
    }

    fn brightness(&self) -> u8 {
        self.tx.borrow().brightness
    }

    fn set_brightness(&self, level: u8) {
        let level = level.min(100);
        self.tx.send_if_modified(|current| {
            let changed = current.brightness != level;
            current.brightness = level;
            changed
        });
    }

    fn snapshot(&self) -> ExposedCharacteristics {
        *self.tx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_projects_missing_completion_as_zero() {
        assert_eq!(
            ExposedCharacteristics::observed(false, None),
            ExposedCharacteristics { on: false, brightness: 0 }
        );
        assert_eq!(
            ExposedCharacteristics::observed(true, Some(38)),
            ExposedCharacteristics { on: true, brightness: 38 }
        );
    }

    #[test]
    fn store_clamps_brightness() {
        let store = CharacteristicStore::new();
        store.set_brightness(250);
        assert_eq!(store.brightness(), 100);
    }

    #[tokio::test]
    async fn store_notifies_only_on_change() {
        let store = CharacteristicStore::new();
        let mut rx = store.subscribe();

        store.set_on(true);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().on);

        store.set_on(true);
        store.set_brightness(0);
        assert!(!rx.has_changed().unwrap());

        store.set_brightness(12);
        rx.changed().await.unwrap();
        assert_eq!(
            *rx.borrow(),
            ExposedCharacteristics { on: true, brightness: 12 }
        );
    }
}
