//! Device Kind Catalog
//!
//! Static mapping from the one-byte device identifier transmitted in every
//! payload to the instrument family it belongs to. Identifiers outside the
//! known range decode to an explicit unknown variant so that frames from
//! newer devices are preserved rather than rejected.

use serde::Serialize;

/// The instrument families reported by the Expert-001 protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeviceKind {
    IonMeterHi,
    IonMeterOxyHi,
    IonMeter,
    IonMeterOxy,
    IonMeter4,
    IonMeter4Oxy,
    CondMeter,
    FotoMeter,
    KariesMeter,
    Kulonomer,
    Fisher,
    PhMeter,
    OxyMeter,
    AllMeter,
    UdakoffMeter,
    IonMeter5,
    Test,
    Titrion,
    /// An identifier outside the known range, preserved as-is.
    Unknown(u8),
}

impl DeviceKind {
    /// Maps a raw device identifier to its kind.
    pub fn from_id(id: u8) -> DeviceKind {
        match id {
            0 => DeviceKind::IonMeterHi,
            1 => DeviceKind::IonMeterOxyHi,
            2 => DeviceKind::IonMeter,
            3 => DeviceKind::IonMeterOxy,
            4 => DeviceKind::IonMeter4,
            5 => DeviceKind::IonMeter4Oxy,
            6 => DeviceKind::CondMeter,
            7 => DeviceKind::FotoMeter,
            8 => DeviceKind::KariesMeter,
            9 => DeviceKind::Kulonomer,
            10 => DeviceKind::Fisher,
            11 => DeviceKind::PhMeter,
            12 => DeviceKind::OxyMeter,
            13 => DeviceKind::AllMeter,
            14 => DeviceKind::UdakoffMeter,
            15 => DeviceKind::IonMeter5,
            16 => DeviceKind::Test,
            17 => DeviceKind::Titrion,
            other => DeviceKind::Unknown(other),
        }
    }

    /// The raw identifier this kind is transmitted as.
    pub fn id(&self) -> u8 {
        match self {
            DeviceKind::IonMeterHi => 0,
            DeviceKind::IonMeterOxyHi => 1,
            DeviceKind::IonMeter => 2,
            DeviceKind::IonMeterOxy => 3,
            DeviceKind::IonMeter4 => 4,
            DeviceKind::IonMeter4Oxy => 5,
            DeviceKind::CondMeter => 6,
            DeviceKind::FotoMeter => 7,
            DeviceKind::KariesMeter => 8,
            DeviceKind::Kulonomer => 9,
            DeviceKind::Fisher => 10,
            DeviceKind::PhMeter => 11,
            DeviceKind::OxyMeter => 12,
            DeviceKind::AllMeter => 13,
            DeviceKind::UdakoffMeter => 14,
            DeviceKind::IonMeter5 => 15,
            DeviceKind::Test => 16,
            DeviceKind::Titrion => 17,
            DeviceKind::Unknown(id) => *id,
        }
    }

    /// Short display name for rendering.
    pub fn name(&self) -> &'static str {
        match self {
            DeviceKind::IonMeterHi => "IonMeterHi",
            DeviceKind::IonMeterOxyHi => "IonMeterOxyHi",
            DeviceKind::IonMeter => "IonMeter",
            DeviceKind::IonMeterOxy => "IonMeterOxy",
            DeviceKind::IonMeter4 => "IonMeter4",
            DeviceKind::IonMeter4Oxy => "IonMeter4Oxy",
            DeviceKind::CondMeter => "CondMeter",
            DeviceKind::FotoMeter => "FotoMeter",
            DeviceKind::KariesMeter => "KariesMeter",
            DeviceKind::Kulonomer => "Kulonomer",
            DeviceKind::Fisher => "Fisher",
            DeviceKind::PhMeter => "PhMeter",
            DeviceKind::OxyMeter => "OxyMeter",
            DeviceKind::AllMeter => "AllMeter",
            DeviceKind::UdakoffMeter => "UdakoffMeter",
            DeviceKind::IonMeter5 => "IonMeter5",
            DeviceKind::Test => "Test",
            DeviceKind::Titrion => "Titrion",
            DeviceKind::Unknown(_) => "Unknown",
        }
    }
}
