//! Integration test for the byte-to-line pipeline
//!
//! Runs the same path the CLI uses - SampleStream over a reader, then
//! bit_line rendering - against an in-memory byte source.

use pin_monitor_decoder::{ChannelSet, SampleStream};
use std::io::Cursor;

#[test]
fn header_then_one_line_per_byte() {
    let bytes = vec![0x00u8, 0xFF, 0xB1, 0xB1, 0x80];
    let channels = ChannelSet::default();

    let mut output = Vec::new();
    output.push(channels.header());
    for sample in SampleStream::new(Cursor::new(bytes)) {
        output.push(sample.unwrap().bit_line());
    }

    assert_eq!(
        output,
        vec![
            "A7,A6,A4,B3,B2,C3,C1,C0",
            "0,0,0,0,0,0,0,0",
            "1,1,1,1,1,1,1,1",
            "1,0,1,1,0,0,0,1",
            "1,0,1,1,0,0,0,1",
            "1,0,0,0,0,0,0,0",
        ]
    );
}

#[test]
fn every_line_has_eight_single_character_fields() {
    let bytes: Vec<u8> = (0..=255).collect();
    for sample in SampleStream::new(Cursor::new(bytes)) {
        let line = sample.unwrap().bit_line();
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 8);
        assert!(fields.iter().all(|f| *f == "0" || *f == "1"));
    }
}
