//! Unit tests for the `reading` module, which decodes the 16-byte payload
//! into typed readings, and for the device and indicator catalogs.

use chrono::Timelike;
use ionexpert_rs::{
    decode_payload, encode_payload, lookup_indicator, ClockMode, DeviceKind, ExpertError,
};
use proptest::prelude::*;

#[allow(clippy::too_many_arguments)]
fn payload(
    result: f32,
    result_type: u8,
    channel: u8,
    label: &[u8; 4],
    second: u8,
    minute: u8,
    device_id: u8,
    crc: u8,
) -> [u8; 16] {
    let mut p = [0u8; 16];
    p[0] = 0xD2;
    p[1..5].copy_from_slice(&result.to_be_bytes());
    p[5] = result_type;
    p[6] = channel;
    p[7..11].copy_from_slice(label);
    p[11] = second;
    p[12] = minute;
    p[13] = device_id;
    p[14] = 0x00;
    p[15] = crc;
    p
}

/// Tests that a well-formed payload decodes with every field equal to the
/// encoded value.
#[test]
fn test_decode_well_formed_payload() {
    let p = payload(7.0, 0, 1, b"Cl  ", 30, 15, 2, 0x77);
    let reading = decode_payload(&p, ClockMode::System).unwrap();

    assert_eq!(reading.result, 7.0);
    assert_eq!(reading.result_type, 0);
    assert_eq!(reading.channel, 1);
    assert_eq!(reading.el_or_op, "Cl");
    assert_eq!(reading.device, DeviceKind::IonMeter);
    assert_eq!(reading.crc, 0x77);
}

/// Tests that a payload whose marker byte is not 0xD2 fails to decode.
#[test]
fn test_unexpected_result_marker() {
    let mut p = payload(1.0, 0, 1, b"pH  ", 0, 0, 11, 0);
    p[0] = 0x2D;
    let err = decode_payload(&p, ClockMode::System).unwrap_err();
    assert!(matches!(err, ExpertError::UnexpectedResultMarker(0x2D)));
}

/// Tests that leading and trailing whitespace is stripped from the label
/// and that the stripped label is already trimmed.
#[test]
fn test_label_trimming_is_idempotent() {
    let p = payload(1.0, 0, 1, b" Cl ", 0, 0, 2, 0);
    let reading = decode_payload(&p, ClockMode::System).unwrap();
    assert_eq!(reading.el_or_op, "Cl");
    assert_eq!(reading.el_or_op.trim(), reading.el_or_op);
}

/// Tests that a non-ASCII byte degrades the label without failing the frame.
#[test]
fn test_label_decoding_is_lossy() {
    let p = payload(1.0, 0, 1, &[0xFF, b'C', b'l', b' '], 0, 0, 2, 0);
    let reading = decode_payload(&p, ClockMode::System).unwrap();
    assert_eq!(reading.el_or_op, "\u{FFFD}Cl");
}

/// Tests that device ids 0-17 map to their fixed kind and anything else
/// maps to the unknown variant without an error.
#[test]
fn test_device_id_mapping() {
    let known = [
        (0, DeviceKind::IonMeterHi),
        (1, DeviceKind::IonMeterOxyHi),
        (2, DeviceKind::IonMeter),
        (3, DeviceKind::IonMeterOxy),
        (4, DeviceKind::IonMeter4),
        (5, DeviceKind::IonMeter4Oxy),
        (6, DeviceKind::CondMeter),
        (7, DeviceKind::FotoMeter),
        (8, DeviceKind::KariesMeter),
        (9, DeviceKind::Kulonomer),
        (10, DeviceKind::Fisher),
        (11, DeviceKind::PhMeter),
        (12, DeviceKind::OxyMeter),
        (13, DeviceKind::AllMeter),
        (14, DeviceKind::UdakoffMeter),
        (15, DeviceKind::IonMeter5),
        (16, DeviceKind::Test),
        (17, DeviceKind::Titrion),
    ];
    for (id, kind) in known {
        assert_eq!(DeviceKind::from_id(id), kind);
        assert_eq!(kind.id(), id);
    }
    assert_eq!(DeviceKind::from_id(18), DeviceKind::Unknown(18));
    assert_eq!(DeviceKind::from_id(200), DeviceKind::Unknown(200));

    let p = payload(1.0, 0, 1, b"K   ", 0, 0, 42, 0);
    let reading = decode_payload(&p, ClockMode::System).unwrap();
    assert_eq!(reading.device, DeviceKind::Unknown(42));
}

/// Tests that in device-clock mode the produced timestamp carries the
/// payload's minute and second fields exactly.
#[test]
fn test_device_clock_overrides_minute_and_second() {
    let p = payload(1.0, 0, 1, b"Na  ", 30, 15, 2, 0);
    let reading = decode_payload(&p, ClockMode::Device).unwrap();
    assert_eq!(reading.time.minute(), 15);
    assert_eq!(reading.time.second(), 30);
}

/// Tests that system-clock mode ignores the device time fields, even when
/// they are out of range.
#[test]
fn test_system_clock_ignores_device_time_fields() {
    let p = payload(1.0, 0, 1, b"Na  ", 99, 99, 2, 0);
    assert!(decode_payload(&p, ClockMode::System).is_ok());
}

/// Tests that out-of-range device time fields fail decoding in
/// device-clock mode.
#[test]
fn test_invalid_device_time() {
    let p = payload(1.0, 0, 1, b"Na  ", 30, 99, 2, 0);
    let err = decode_payload(&p, ClockMode::Device).unwrap_err();
    assert!(matches!(
        err,
        ExpertError::InvalidDeviceTime {
            minute: 99,
            second: 30
        }
    ));
}

/// Tests that the indicator code is the result-type low nibble and that
/// aliased codes surface every candidate interpretation.
#[test]
fn test_indicator_code_and_aliases() {
    let p = payload(1.0, 0xF2, 1, b"O2  ", 0, 0, 3, 0);
    let reading = decode_payload(&p, ClockMode::System).unwrap();
    assert_eq!(reading.indicator_code(), 2);

    let candidates = lookup_indicator(reading.indicator_code());
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|i| i.unit == "mg/L"));
}

/// Tests that a decoded reading packs back into the payload bytes it was
/// decoded from.
#[test]
fn test_encode_decode_round_trip() {
    let p = payload(-42.5, 0x13, 3, b"NO3 ", 12, 45, 7, 0xA1);
    let reading = decode_payload(&p, ClockMode::Device).unwrap();
    assert_eq!(encode_payload(&reading), p);
}

/// Tests that the rendered form is JSON with the expected fields.
#[test]
fn test_display_renders_json() {
    let p = payload(7.0, 0, 1, b"Cl  ", 30, 15, 2, 0);
    let reading = decode_payload(&p, ClockMode::System).unwrap();
    let value: serde_json::Value = serde_json::from_str(&reading.to_string()).unwrap();
    assert_eq!(value["result"], 7.0);
    assert_eq!(value["channel"], 1);
    assert_eq!(value["electrode or operation"], "Cl");
    assert_eq!(value["device"], "IonMeter");
}

proptest! {
    /// Any well-formed payload decodes with every field equal to the
    /// encoded value.
    #[test]
    fn prop_decode_round_trip(
        result in -1.0e6f32..1.0e6f32,
        result_type in any::<u8>(),
        channel in any::<u8>(),
        label in "[A-Za-z0-9]{0,4}",
        second in 0u8..60,
        minute in 0u8..60,
        device_id in any::<u8>(),
        crc in any::<u8>(),
    ) {
        let mut field = [b' '; 4];
        for (dst, src) in field.iter_mut().zip(label.bytes()) {
            *dst = src;
        }
        let p = payload(result, result_type, channel, &field, second, minute, device_id, crc);
        let reading = decode_payload(&p, ClockMode::Device).unwrap();

        prop_assert_eq!(reading.result, result);
        prop_assert_eq!(reading.result_type, result_type);
        prop_assert_eq!(reading.channel, channel);
        prop_assert_eq!(reading.el_or_op, label);
        prop_assert_eq!(reading.time.minute(), u32::from(minute));
        prop_assert_eq!(reading.time.second(), u32::from(second));
        prop_assert_eq!(reading.device, DeviceKind::from_id(device_id));
        prop_assert_eq!(reading.crc, crc);
    }
}
