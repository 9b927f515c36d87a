//! Sample rate statistics
//!
//! Counts samples per second and changed samples per second, the same two
//! figures the probe shows on its own screen. A change is a byte that
//! differs from its predecessor; the first sample of a run never counts as
//! a change. Figures go to the logger once per second so the data stream on
//! stdout stays untouched.

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

pub struct RateStats {
    window_start: Instant,
    samples: u64,
    changes: u64,
    last: Option<u8>,
}

impl RateStats {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            samples: 0,
            changes: 0,
            last: None,
        }
    }

    /// Count one sample byte
    pub fn record(&mut self, byte: u8) {
        self.samples += 1;
        if let Some(prev) = self.last {
            if prev != byte {
                self.changes += 1;
            }
        }
        self.last = Some(byte);
    }

    /// Log and reset the counters if the current window has elapsed
    pub fn tick(&mut self) {
        if self.window_start.elapsed() >= WINDOW {
            log::info!("samples/s: {}  changes/s: {}", self.samples, self.changes);
            self.samples = 0;
            self.changes = 0;
            self.window_start = Instant::now();
        }
    }
}
