//! # Payload Decoding
//!
//! This module decodes the validated 16-byte Expert-001 payload into a
//! [`Reading`], and packs readings back into payload bytes. Field parsing
//! uses the `nom` crate; all multi-byte fields are big-endian.
//!
//! Payload layout:
//!
//! | Offset | Size | Field       |
//! |--------|------|-------------|
//! | 0      | 1    | marker 0xD2 |
//! | 1      | 4    | result, IEEE-754 f32 |
//! | 5      | 1    | result type |
//! | 6      | 1    | channel     |
//! | 7      | 4    | electrode/operation label, ASCII |
//! | 11     | 1    | second      |
//! | 12     | 1    | minute      |
//! | 13     | 1    | device id   |
//! | 14     | 1    | address, reserved |
//! | 15     | 1    | crc, not validated |

use crate::constants::{PAYLOAD_LEN, RESULT_MARKER};
use crate::error::ExpertError;
use crate::payload::device::DeviceKind;
use crate::payload::indicators::indicator_code;
use chrono::{Local, NaiveDateTime, Timelike};
use nom::bytes::complete::take;
use nom::number::complete::{be_f32, be_u8};
use nom::IResult;
use serde::Serialize;
use std::fmt;

/// Selects how reading timestamps are produced. Chosen once for the
/// lifetime of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Wall-clock instant at decode time, full precision.
    #[default]
    System,
    /// Wall-clock date and hour, with minute and second taken from the
    /// device-reported fields. The device does not transmit a full
    /// timestamp, so the remaining components come from the system clock.
    Device,
}

/// One decoded measurement record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Measurement value.
    pub result: f32,
    /// Raw result-type byte. The low nibble selects an indicator code;
    /// aliased codes are not resolved here.
    pub result_type: u8,
    /// Instrument channel number.
    pub channel: u8,
    /// Electrode name or operation code, whitespace-trimmed.
    pub el_or_op: String,
    /// Timestamp per [`ClockMode`].
    pub time: NaiveDateTime,
    /// Reporting instrument family.
    pub device: DeviceKind,
    /// Trailing integrity byte, decoded but not validated.
    pub crc: u8,
}

impl Reading {
    /// The indicator code selected by the result-type low nibble. Use
    /// [`crate::payload::indicators::lookup_indicator`] for its candidate
    /// interpretations.
    pub fn indicator_code(&self) -> u8 {
        indicator_code(self.result_type)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = serde_json::json!({
            "result": self.result,
            "type": self.result_type,
            "channel": self.channel,
            "electrode or operation": self.el_or_op,
            "time": self.time.format("%Y-%m-%d %H:%M:%S").to_string(),
            "device": self.device.name(),
        });
        let text = serde_json::to_string_pretty(&value).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

struct RawPayload {
    result: f32,
    result_type: u8,
    channel: u8,
    label: [u8; 4],
    second: u8,
    minute: u8,
    device_id: u8,
    crc: u8,
}

fn parse_fields(input: &[u8]) -> IResult<&[u8], RawPayload> {
    let (input, result) = be_f32(input)?;
    let (input, result_type) = be_u8(input)?;
    let (input, channel) = be_u8(input)?;
    let (input, label_bytes) = take(4usize)(input)?;
    let (input, second) = be_u8(input)?;
    let (input, minute) = be_u8(input)?;
    let (input, device_id) = be_u8(input)?;
    let (input, _address) = be_u8(input)?;
    let (input, crc) = be_u8(input)?;

    let mut label = [0u8; 4];
    label.copy_from_slice(label_bytes);

    Ok((
        input,
        RawPayload {
            result,
            result_type,
            channel,
            label,
            second,
            minute,
            device_id,
            crc,
        },
    ))
}

/// Decodes a validated 16-byte payload into a [`Reading`].
///
/// # Errors
/// Returns [`ExpertError::UnexpectedResultMarker`] when byte 0 is not
/// `0xD2`, and [`ExpertError::InvalidDeviceTime`] when device-clock mode
/// is selected and the reported minute/second are out of range.
pub fn decode_payload(
    payload: &[u8; PAYLOAD_LEN],
    clock: ClockMode,
) -> Result<Reading, ExpertError> {
    if payload[0] != RESULT_MARKER {
        return Err(ExpertError::UnexpectedResultMarker(payload[0]));
    }

    let (_, raw) =
        parse_fields(&payload[1..]).map_err(|e| ExpertError::Other(format!("{e:?}")))?;

    // Labels are nominally ASCII; a stray byte degrades the label, not
    // the frame.
    let el_or_op = String::from_utf8_lossy(&raw.label).trim().to_string();

    Ok(Reading {
        result: raw.result,
        result_type: raw.result_type,
        channel: raw.channel,
        el_or_op,
        time: reading_time(clock, raw.minute, raw.second)?,
        device: DeviceKind::from_id(raw.device_id),
        crc: raw.crc,
    })
}

/// Synthesizes the reading timestamp. In device-clock mode the wall clock
/// contributes date and hour only; minute and second come from the device.
fn reading_time(clock: ClockMode, minute: u8, second: u8) -> Result<NaiveDateTime, ExpertError> {
    let now = Local::now().naive_local();
    match clock {
        ClockMode::System => Ok(now),
        ClockMode::Device => now
            .date()
            .and_hms_opt(now.hour(), u32::from(minute), u32::from(second))
            .ok_or(ExpertError::InvalidDeviceTime { minute, second }),
    }
}

/// Packs a reading back into payload bytes. The label is space-padded to
/// its 4-byte field; the minute and second are taken from the reading's
/// timestamp; the reserved address byte is zero.
pub fn encode_payload(reading: &Reading) -> [u8; PAYLOAD_LEN] {
    let mut label = [b' '; 4];
    for (dst, src) in label.iter_mut().zip(reading.el_or_op.bytes()) {
        *dst = src;
    }

    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = RESULT_MARKER;
    payload[1..5].copy_from_slice(&reading.result.to_be_bytes());
    payload[5] = reading.result_type;
    payload[6] = reading.channel;
    payload[7..11].copy_from_slice(&label);
    payload[11] = reading.time.second() as u8;
    payload[12] = reading.time.minute() as u8;
    payload[13] = reading.device.id();
    payload[14] = 0x00;
    payload[15] = reading.crc;
    payload
}
