//! In-memory printer and characteristic doubles shared by unit tests.

use std::sync::Mutex;

use octoprint_client::{
    JobCommand, JobProgress, JobResponse, OctoPrintError, PrinterApi, PrinterFlags, PrinterState,
    PrinterStateResponse, Result,
};

use crate::characteristics::{Characteristics, ExposedCharacteristics};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeDevice {
    pub reachable: bool,
    pub printing: bool,
    pub completion: Option<f64>,
    pub reject_commands: bool,
    pub commands: Vec<JobCommand>,
    pub printer_reads: usize,
    pub job_reads: usize,
}

/// A printer that applies job commands to its own state, like OctoPrint does.
#[derive(Debug, Default)]
pub(crate) struct FakePrinter {
    device: Mutex<FakeDevice>,
}

impl FakePrinter {
    pub fn printing(completion: f64) -> Self {
        Self {
            device: Mutex::new(FakeDevice {
                reachable: true,
                printing: true,
                completion: Some(completion),
                ..FakeDevice::default()
            }),
        }
    }

    pub fn idle() -> Self {
        Self {
            device: Mutex::new(FakeDevice {
                reachable: true,
                ..FakeDevice::default()
            }),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut FakeDevice)) {
        f(&mut self.device.lock().unwrap());
    }

    pub fn device(&self) -> FakeDevice {
        self.device.lock().unwrap().clone()
    }

    pub fn reads(&self) -> (usize, usize) {
        let device = self.device.lock().unwrap();
        (device.printer_reads, device.job_reads)
    }
}

fn unreachable() -> OctoPrintError {
    OctoPrintError::Api {
        status: 503,
        message: "unreachable".into(),
    }
}

impl PrinterApi for FakePrinter {
    fn server(&self) -> &str {
        "http://fake-octoprint"
    }

    async fn printer_state(&self) -> Result<PrinterStateResponse> {
        let mut device = self.device.lock().unwrap();
        device.printer_reads += 1;
        if !device.reachable {
            return Err(unreachable());
        }
        Ok(PrinterStateResponse {
            state: PrinterState {
                flags: PrinterFlags {
                    printing: Some(device.printing),
                },
            },
        })
    }

    async fn job(&self) -> Result<JobResponse> {
        let mut device = self.device.lock().unwrap();
        device.job_reads += 1;
        if !device.reachable {
            return Err(unreachable());
        }
        Ok(JobResponse {
            progress: JobProgress {
                completion: device.completion,
            },
        })
    }

    async fn job_command(&self, command: JobCommand) -> Result<()> {
        let mut device = self.device.lock().unwrap();
        device.commands.push(command);
        if !device.reachable {
            return Err(unreachable());
        }
        if device.reject_commands {
            return Err(OctoPrintError::Api {
                status: 409,
                message: "Printer is not operational".into(),
            });
        }
        match command {
            JobCommand::Pause => device.printing = false,
            JobCommand::Resume => device.printing = true,
            JobCommand::Cancel => {
                device.printing = false;
                device.completion = None;
            }
        }
        Ok(())
    }
}

/// Characteristic surface that counts pushes from the accessory.
#[derive(Debug, Default)]
pub(crate) struct RecordingCharacteristics {
    inner: Mutex<Recorded>,
}

#[derive(Debug, Default)]
struct Recorded {
    value: ExposedCharacteristics,
    pushes: usize,
}

impl RecordingCharacteristics {
    /// Start from an optimistic host-side value.
    pub fn showing(on: bool, brightness: u8) -> Self {
        Self {
            inner: Mutex::new(Recorded {
                value: ExposedCharacteristics { on, brightness },
                pushes: 0,
            }),
        }
    }

    /// Number of `set_on` + `set_brightness` calls received.
    pub fn pushes(&self) -> usize {
        self.inner.lock().unwrap().pushes
    }
}

impl Characteristics for RecordingCharacteristics {
    fn on(&self) -> bool {
        self.inner.lock().unwrap().value.on
    }

    fn set_on(&self, on: bool) {
        let mut inner = self.inner.lock().unwrap();
        inner.value.on = on;
        inner.pushes += 1;
    }

    fn brightness(&self) -> u8 {
        self.inner.lock().unwrap().value.brightness
    }

    fn set_brightness(&self, level: u8) {
        let mut inner = self.inner.lock().unwrap();
        inner.value.brightness = level;
        inner.pushes += 1;
    }
}
