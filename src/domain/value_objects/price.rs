//! Price value objects for the service calculator

use std::fmt;

/// Identifier of a detailing service, as used in the `#service` select
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceId {
    ExteriorWash,
    InteriorDetailing,
    PremiumPolish,
    FullDetail,
    CeramicCoating,
}

impl ServiceId {
    pub const ALL: [ServiceId; 5] = [
        ServiceId::ExteriorWash,
        ServiceId::InteriorDetailing,
        ServiceId::PremiumPolish,
        ServiceId::FullDetail,
        ServiceId::CeramicCoating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::ExteriorWash => "exterior-wash",
            ServiceId::InteriorDetailing => "interior-detailing",
            ServiceId::PremiumPolish => "premium-polish",
            ServiceId::FullDetail => "full-detail",
            ServiceId::CeramicCoating => "ceramic-coating",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

/// Whole-dollar price
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub u32);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
