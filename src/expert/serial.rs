//! # Expert-001 Serial Communication
//!
//! This module provides the implementation for handling the serial
//! communication aspect of the Expert-001 protocol: opening the port with
//! the line-control configuration the instrument expects, and handing the
//! opened port to a [`ReadingStream`].

use crate::error::ExpertError;
use crate::expert::stream::ReadingStream;
use crate::payload::reading::ClockMode;
use serialport::SerialPort;
use std::time::Duration;

/// Configuration for serial connection.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub baudrate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            baudrate: 9600,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Represents a handle to the Expert-001 serial connection, encapsulating
/// the opened serial port.
pub struct ExpertDeviceHandle {
    port: Box<dyn SerialPort>,
}

impl ExpertDeviceHandle {
    /// Establishes a connection to the serial port using the provided port
    /// name and the default configuration (9600 baud, 5 second timeout).
    pub fn connect(port_name: &str) -> Result<ExpertDeviceHandle, ExpertError> {
        Self::connect_with_config(port_name, SerialConfig::default())
    }

    /// Establishes a connection with custom config. The instrument requires
    /// 8N1 framing with RTS deasserted and DTR asserted.
    pub fn connect_with_config(
        port_name: &str,
        config: SerialConfig,
    ) -> Result<ExpertDeviceHandle, ExpertError> {
        let mut port = serialport::new(port_name, config.baudrate)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .timeout(config.timeout)
            .open()
            .map_err(|e| ExpertError::SerialPortError(e.to_string()))?;

        port.write_request_to_send(false)
            .map_err(|e| ExpertError::SerialPortError(e.to_string()))?;
        port.write_data_terminal_ready(true)
            .map_err(|e| ExpertError::SerialPortError(e.to_string()))?;

        Ok(ExpertDeviceHandle { port })
    }

    /// Consumes the handle and returns a stream of readings over the port.
    /// Dropping the stream (or the transport returned by
    /// [`ReadingStream::into_inner`]) closes the port.
    pub fn into_stream(self, clock: ClockMode) -> ReadingStream<Box<dyn SerialPort>> {
        ReadingStream::new(self.port, clock)
    }
}
