//! # ionexpert-rs - A Rust Crate for Expert-001 Ion Meter Telemetry
//!
//! The ionexpert-rs crate decodes the binary telemetry stream emitted by
//! Econix-Expert laboratory instruments (ion meters, conductivity meters,
//! pH meters, titration devices and related families) over a serial link
//! into structured measurement records.
//!
//! ## Features
//!
//! - Connect to an Expert-001 device using a serial port connection
//! - Locate and validate frame boundaries, resynchronizing after frames
//!   with an invalid declared length
//! - Decode the fixed 16-byte payload into typed readings: measurement
//!   value, indicator code, channel, electrode/operation label, timestamp
//!   and device kind
//! - Iterate readings as a blocking, pull-based stream
//! - Render readings as JSON for downstream monitoring and logging
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```no_run
//! use ionexpert_rs::{connect, ClockMode};
//!
//! # fn main() -> Result<(), ionexpert_rs::ExpertError> {
//! let handle = connect("/dev/ttyUSB0")?;
//! for reading in handle.into_stream(ClockMode::System) {
//!     println!("{}", reading?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod expert;
pub mod logging;
pub mod payload;

pub use crate::error::ExpertError;
pub use crate::logging::{init_logger, log_info};

// Core protocol types
pub use expert::frame::{encode_frame, read_frame, FrameEvent};
pub use expert::serial::{ExpertDeviceHandle, SerialConfig};
pub use expert::stream::ReadingStream;
pub use payload::device::DeviceKind;
pub use payload::indicators::{lookup_indicator, IndicatorInfo};
pub use payload::reading::{decode_payload, encode_payload, ClockMode, Reading};

/// Connect to an Expert-001 device via serial port.
///
/// # Arguments
/// * `port` - Serial port path (e.g., "/dev/ttyUSB0" on Linux, "COM3" on Windows)
///
/// # Returns
/// * `Ok(ExpertDeviceHandle)` - Connected device handle
/// * `Err(ExpertError)` - Connection failed
pub fn connect(port: &str) -> Result<ExpertDeviceHandle, ExpertError> {
    ExpertDeviceHandle::connect(port)
}

/// Connect to an Expert-001 device with custom serial configuration.
///
/// # Arguments
/// * `port` - Serial port path
/// * `config` - Baud rate and read timeout
///
/// # Returns
/// * `Ok(ExpertDeviceHandle)` - Connected device handle
/// * `Err(ExpertError)` - Connection failed
pub fn connect_with_config(
    port: &str,
    config: SerialConfig,
) -> Result<ExpertDeviceHandle, ExpertError> {
    ExpertDeviceHandle::connect_with_config(port, config)
}
