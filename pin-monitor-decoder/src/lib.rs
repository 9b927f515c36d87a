//! Pin Monitor Decoder Library
//!
//! A small, reusable library for decoding the byte stream emitted by a
//! digital pin probe over a serial link. The probe sends one status byte per
//! sample; each bit carries the level of one named input line, most
//! significant bit first.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on decoding:
//! - Opens the serial device and hands it back as a plain byte reader
//! - Turns any byte reader into a stream of [`Sample`] values
//! - Renders samples as comma-separated binary digit lines
//! - Carries the channel label set used for the header line
//!
//! The library does NOT:
//! - Print anything to stdout
//! - Track sample rates or change counts
//! - Parse command-line arguments or configuration files
//!
//! All higher-level functionality is in the application layer
//! (pin-monitor-cli).
//!
//! # Example Usage
//!
//! ```
//! use pin_monitor_decoder::{ChannelSet, SampleStream};
//! use std::io::Cursor;
//!
//! let channels = ChannelSet::default();
//! println!("{}", channels.header());
//!
//! // Any io::Read works as a sample source; a serial port in production,
//! // an in-memory buffer here.
//! let stream = SampleStream::new(Cursor::new(vec![0xB1u8]));
//! for sample in stream {
//!     println!("{}", sample.unwrap().bit_line());
//! }
//! ```

// Public modules
pub mod channels;
pub mod port;
pub mod stream;
pub mod types;

// Re-export main types for convenience
pub use channels::ChannelSet;
pub use stream::SampleStream;
pub use types::{MonitorError, Result, Sample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: default channel set matches the probe's wiring
        let channels = ChannelSet::default();
        assert_eq!(channels.header(), "A7,A6,A4,B3,B2,C3,C1,C0");
    }
}
