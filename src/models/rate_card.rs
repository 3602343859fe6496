use serde::Serialize;

/// Fixed pricing parameters for one service tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateCard {
    pub id: &'static str,
    pub label: &'static str,
    pub base: f64,
    pub per_km: f64,
    pub per_min: f64,
    pub booking_fee: f64,
}

/// Known service tiers, in selector order.
pub const RATE_CARDS: [RateCard; 3] = [
    RateCard {
        id: "uberx",
        label: "UberX",
        base: 40.0,
        per_km: 12.0,
        per_min: 1.8,
        booking_fee: 30.0,
    },
    RateCard {
        id: "uberxl",
        label: "UberXL",
        base: 60.0,
        per_km: 16.0,
        per_min: 2.4,
        booking_fee: 40.0,
    },
    RateCard {
        id: "uberblack",
        label: "Black",
        base: 100.0,
        per_km: 30.0,
        per_min: 4.0,
        booking_fee: 60.0,
    },
];

pub const DEFAULT_SERVICE: &str = "uberx";

impl RateCard {
    pub fn find(id: &str) -> Option<&'static RateCard> {
        RATE_CARDS.iter().find(|card| card.id == id)
    }

    pub fn all() -> &'static [RateCard] {
        &RATE_CARDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_tiers() {
        assert_eq!(RateCard::find("uberxl").map(|c| c.label), Some("UberXL"));
        assert_eq!(RateCard::find("uberblack").map(|c| c.base), Some(100.0));
        assert!(RateCard::find(DEFAULT_SERVICE).is_some());
    }

    #[test]
    fn lookup_is_exact() {
        assert!(RateCard::find("UberX").is_none());
        assert!(RateCard::find("").is_none());
    }
}
