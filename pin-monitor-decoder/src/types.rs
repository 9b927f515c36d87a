//! Core types for the pin monitor decoder library
//!
//! This module defines the sample type the decoder emits and the error type
//! shared across the library. The decoder is stateless and only converts
//! bytes to samples - it does not track changes or rates.

use std::fmt;
use std::io;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that can occur while reading and decoding samples
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Failed to open serial port {path}: {source}")]
    PortOpen {
        path: String,
        source: serialport::Error,
    },

    #[error("Failed to enumerate serial ports: {0}")]
    PortEnumeration(serialport::Error),

    #[error("Read error: {0}")]
    Read(#[from] io::Error),

    #[error("Invalid channel set: {0}")]
    InvalidChannelSet(String),
}

/// One status byte read from the probe
///
/// Each bit carries the level of one input line. Bit index 0 is the most
/// significant bit, matching the first column of the printed header. This
/// correspondence is a wiring convention with the probe, not something the
/// decoder can verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample(pub u8);

impl Sample {
    /// Number of channels carried by one sample byte
    pub const CHANNELS: usize = 8;

    /// Get the level of one channel (index 0 = most significant bit)
    ///
    /// # Panics
    /// Panics if `index >= Sample::CHANNELS`.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < Self::CHANNELS, "channel index out of range: {index}");
        (self.0 >> (Self::CHANNELS - 1 - index)) & 1 == 1
    }

    /// Render the sample as comma-separated binary digits, MSB first
    ///
    /// The result is always exactly 8 single-character fields, zero-padded,
    /// with no base prefix: `0xB1` renders as `1,0,1,1,0,0,0,1`.
    pub fn bit_line(&self) -> String {
        let mut line = String::with_capacity(2 * Self::CHANNELS - 1);
        for index in 0..Self::CHANNELS {
            if index > 0 {
                line.push(',');
            }
            line.push(if self.bit(index) { '1' } else { '0' });
        }
        line
    }

    /// Render the sample with the raw byte appended as a hex field
    ///
    /// Mirrors the HEX column the probe shows on its own screen:
    /// `1,0,1,1,0,0,0,1,0xB1`.
    pub fn bit_line_with_hex(&self) -> String {
        format!("{},0x{:02X}", self.bit_line(), self.0)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_line_all_zero() {
        assert_eq!(Sample(0x00).bit_line(), "0,0,0,0,0,0,0,0");
    }

    #[test]
    fn test_bit_line_all_one() {
        assert_eq!(Sample(0xFF).bit_line(), "1,1,1,1,1,1,1,1");
    }

    #[test]
    fn test_bit_line_mixed() {
        // 0xB1 = 0b10110001
        assert_eq!(Sample(0xB1).bit_line(), "1,0,1,1,0,0,0,1");
    }

    #[test]
    fn test_bit_line_shape_for_all_bytes() {
        for value in 0..=255u8 {
            let line = Sample(value).bit_line();
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), Sample::CHANNELS);
            for field in fields {
                assert!(field == "0" || field == "1");
            }
        }
    }

    #[test]
    fn test_bit_indexing_is_msb_first() {
        let sample = Sample(0b1000_0001);
        assert!(sample.bit(0));
        assert!(!sample.bit(1));
        assert!(sample.bit(7));
    }

    #[test]
    fn test_bit_line_with_hex() {
        assert_eq!(Sample(0xB1).bit_line_with_hex(), "1,0,1,1,0,0,0,1,0xB1");
        assert_eq!(Sample(0x0A).bit_line_with_hex(), "0,0,0,0,1,0,1,0,0x0A");
    }

    #[test]
    fn test_display_matches_bit_line() {
        assert_eq!(format!("{}", Sample(0xB1)), Sample(0xB1).bit_line());
    }
}
