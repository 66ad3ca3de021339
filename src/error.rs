//! # Expert-001 Error Handling
//!
//! This module defines the ExpertError enum, which represents the different
//! error types that can occur in the ionexpert-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur while reading from
/// an Expert-001 device.
#[derive(Debug, Error)]
pub enum ExpertError {
    /// Indicates an error while opening or configuring the serial port.
    #[error("Serial port error: {0}")]
    SerialPortError(String),

    /// Indicates a transport-level read failure or timeout mid-frame.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Indicates a frame header whose marker byte is not 0xA5.
    #[error("Unexpected header value 0x{0:02X}, should be 0xA5")]
    UnexpectedHeader(u8),

    /// Indicates a payload whose leading marker byte is not 0xD2.
    #[error("Unexpected COM_READ_RESULT value 0x{0:02X}, should be 0xD2")]
    UnexpectedResultMarker(u8),

    /// Indicates device-reported minute/second fields that cannot form a
    /// timestamp in device-clock mode.
    #[error("Invalid device time: minute {minute}, second {second}")]
    InvalidDeviceTime { minute: u8, second: u8 },

    /// A catch‑all error for uncategorized cases.
    #[error("Other error: {0}")]
    Other(String),
}
