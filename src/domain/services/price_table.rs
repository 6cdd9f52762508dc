//! Static service price table

use crate::domain::value_objects::{Price, ServiceId};

/// Read-only mapping from service to price
#[derive(Clone, Debug)]
pub struct PriceTable {
    entries: [(ServiceId, Price); 5],
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PriceTable {
    pub fn standard() -> Self {
        Self {
            entries: [
                (ServiceId::ExteriorWash, Price(45)),
                (ServiceId::InteriorDetailing, Price(75)),
                (ServiceId::PremiumPolish, Price(120)),
                (ServiceId::FullDetail, Price(200)),
                (ServiceId::CeramicCoating, Price(350)),
            ],
        }
    }

    pub fn price(&self, service: ServiceId) -> Price {
        self.entries
            .iter()
            .find(|(id, _)| *id == service)
            .map(|(_, price)| *price)
            .unwrap_or_default()
    }

    /// Price for a raw select value; unknown values cost `$0`
    pub fn price_for_value(&self, value: &str) -> Price {
        ServiceId::from_value(value)
            .map(|id| self.price(id))
            .unwrap_or_default()
    }
}
