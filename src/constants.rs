//! Expert-001 Protocol Constants
//!
//! This module defines the fixed marker bytes and field sizes of the
//! Expert-001 serial telemetry format.

/// Length of the outer frame header (reserved byte, marker, declared length).
pub const FRAME_HEADER_LEN: usize = 3;

/// Marker byte every frame header must carry.
pub const FRAME_MARKER: u8 = 0xA5;

/// Declared payload length of a well-formed frame.
pub const PAYLOAD_DECLARED_LEN: u8 = 15;

/// Actual size of the payload that follows a well-formed header.
pub const PAYLOAD_LEN: usize = 16;

/// Number of bytes skipped after a frame with an invalid declared length.
pub const RESYNC_SKIP_LEN: usize = 3;

/// Marker byte every payload must start with (COM_READ_RESULT).
pub const RESULT_MARKER: u8 = 0xD2;

/// Mask selecting the indicator code from the result-type byte.
pub const INDICATOR_MASK: u8 = 0x0F;

/// Highest device identifier with a known device kind.
pub const MAX_DEVICE_ID: u8 = 17;
