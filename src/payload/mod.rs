//! The payload module contains the components responsible for decoding the
//! 16-byte Expert-001 payload into typed readings, together with the device
//! and indicator-code catalogs used to interpret its fields.

pub mod device;
pub mod indicators;
pub mod reading;

pub use device::DeviceKind;
pub use indicators::{lookup_indicator, IndicatorInfo};
pub use reading::{decode_payload, encode_payload, ClockMode, Reading};
