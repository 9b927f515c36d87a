//! Serial port access
//!
//! Opens the probe's serial device with the settings the firmware expects
//! (8N1, no flow control) and a finite read timeout so the blocking read
//! loop in [`crate::stream`] can distinguish "no sample yet" from a dead
//! port. The handle is held for the process lifetime; there is no reconnect
//! path, an unplugged probe ends the run.

use crate::types::{MonitorError, Result};
use serialport::SerialPort;
use std::time::Duration;

/// Read timeout per attempt; timeouts are retried by the sample stream
const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Open a serial device for sample reading
///
/// # Arguments
/// * `path` - device path, e.g. `/dev/ttyACM1`
/// * `baud` - baud rate; nominal on USB CDC devices but still negotiated
///
/// # Returns
/// * `Err(MonitorError::PortOpen)` if the device is missing or inaccessible
pub fn open(path: &str, baud: u32) -> Result<Box<dyn SerialPort>> {
    log::info!("Opening serial port {} at {} baud", path, baud);

    let port = serialport::new(path, baud)
        .data_bits(serialport::DataBits::Eight)
        .parity(serialport::Parity::None)
        .stop_bits(serialport::StopBits::One)
        .flow_control(serialport::FlowControl::None)
        .timeout(READ_TIMEOUT)
        .open()
        .map_err(|source| MonitorError::PortOpen {
            path: path.to_string(),
            source,
        })?;

    log::debug!("Serial port {} opened", path);
    Ok(port)
}

/// List the serial devices visible on this host
pub fn available_ports() -> Result<Vec<String>> {
    let ports = serialport::available_ports().map_err(MonitorError::PortEnumeration)?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
