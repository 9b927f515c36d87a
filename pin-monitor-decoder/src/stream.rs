//! Sample stream iterator
//!
//! Adapts any byte reader into a stream of decoded samples, one sample per
//! byte, in arrival order. In production the reader is a serial port (see
//! [`crate::port`]); tests and file replay can plug in any `io::Read`.

use crate::types::{Result, Sample};
use std::io::{self, Read};

/// Iterator that yields one [`Sample`] per byte read
///
/// Read timeouts are retried internally: on a serial port with a finite
/// read timeout they are the idle gaps between samples, not errors. Any
/// other I/O error is yielded once and ends the stream. End-of-input ends
/// the stream silently (a serial port never reports EOF, so this path is
/// only reachable with in-memory or file readers).
pub struct SampleStream<R: Read> {
    reader: R,
    failed: bool,
}

impl<R: Read> SampleStream<R> {
    /// Wrap a byte reader as a sample stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            failed: false,
        }
    }
}

impl<R: Read> Iterator for SampleStream<R> {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(Ok(Sample(byte[0]))),
                Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::error!("Sample read failed: {}", e);
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
