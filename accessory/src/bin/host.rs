//! Headless host for a single printer accessory.
//!
//! Loads the accessory config, polls both characteristics on an interval
//! the way a home-automation host does, and logs every value change.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use octoprint_accessory_lib::{AccessoryConfig, Characteristics, PrinterAccessory};

const DEFAULT_CONFIG_PATH: &str = "accessory.json";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

fn config_path() -> String {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("OCTOPRINT_ACCESSORY_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

fn poll_interval() -> Duration {
    let secs = std::env::var("HOST_POLL_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);
    Duration::from_secs(secs.max(1))
}

async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = config_path();
    tracing::info!("Loading accessory config from: {path}");
    let config = AccessoryConfig::load(&path)?;
    let accessory = PrinterAccessory::from_config(config)?;
    let info = accessory.information();
    tracing::info!(
        name = %info.name,
        manufacturer = info.manufacturer,
        model = info.model,
        "Accessory registered"
    );

    let shutdown = CancellationToken::new();

    let mut changes = accessory.characteristics().subscribe();
    let watch_token = shutdown.clone();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = watch_token.cancelled() => return,
                changed = changes.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let current = *changes.borrow_and_update();
                    tracing::info!(on = current.on, brightness = current.brightness, "Characteristics changed");
                }
            }
        }
    });

    let interval = poll_interval();
    let poll_token = shutdown.clone();
    let poller = tokio::spawn(async move {
        loop {
            let bridge = accessory.bridge();
            let (on, brightness) =
                tokio::join!(bridge.get_printing_state(), bridge.get_progress());
            let characteristics = accessory.characteristics();
            characteristics.set_on(on);
            characteristics.set_brightness(brightness);

            if sleep_or_cancel(&poll_token, interval).await {
                tracing::info!("Polling stopped (shutdown)");
                return;
            }
        }
    });

    tracing::info!(
        interval_secs = interval.as_secs(),
        "Host running. Press Ctrl+C to stop."
    );
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    shutdown.cancel();
    poller.await?;
    Ok(())
}
