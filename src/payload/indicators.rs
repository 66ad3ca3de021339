//! Indicator Code Mapping Table and Lookup
//!
//! The low nibble of the result-type byte selects an indicator code that
//! describes the physical unit of the measurement. Several codes are
//! aliased: semantically distinct units share a numeric code and the
//! protocol leaves disambiguation to device-kind and channel context, so
//! lookups return every candidate for a code instead of resolving one.

use crate::constants::INDICATOR_MASK;

/// One interpretation of an indicator code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorInfo {
    pub code: u8,
    pub unit: &'static str,
    pub quantity: &'static str,
}

/// Indicator codes as transmitted in the result-type low nibble. Duplicate
/// code entries are deliberate aliases.
pub const INDICATOR_CODES: &[(u8, &str, &str)] = &[
    (0, "pX", "Ion activity"),
    (1, "mol/L", "Concentration"),
    (2, "mg/L", "Concentration"),
    (2, "mg/L", "Dissolved oxygen"),
    (3, "mV", "Potential"),
    (4, "mg/kg", "Concentration"),
    (5, "deg", "Temperature"),
    (6, "Ohm", "Resistance"),
    (7, "uS/cm", "Conductivity"),
    (8, "mS/cm", "Conductivity"),
    (9, "mg/dm^3", "Concentration"),
    (10, "%", "Percentage"),
    (10, "count", "Ventilation"),
    (11, "mg/100mL", "Concentration"),
    (11, "g/L", "Concentration"),
    (12, "deg", "Titratable acidity"),
    (13, "uA", "Current"),
    (14, "mA", "Current"),
];

/// Looks up every interpretation of an indicator code. Returns an empty
/// vector for codes the table does not define.
pub fn lookup_indicator(code: u8) -> Vec<IndicatorInfo> {
    INDICATOR_CODES
        .iter()
        .filter(|(c, _, _)| *c == code)
        .map(|(code, unit, quantity)| IndicatorInfo {
            code: *code,
            unit,
            quantity,
        })
        .collect()
}

/// Extracts the indicator code from a raw result-type byte.
pub fn indicator_code(result_type: u8) -> u8 {
    result_type & INDICATOR_MASK
}
