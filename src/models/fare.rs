use serde::Serialize;

use crate::models::rate_card::RateCard;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareBreakdown {
    pub base: f64,
    pub distance_cost: f64,
    pub time_cost: f64,
    pub booking_fee: f64,
    pub raw: f64,
    pub surge: f64,
    pub total: f64,
}

impl FareBreakdown {
    /// Applies `card` to a trip. Surge below 1 is never applied as a discount.
    pub fn compute(card: &RateCard, distance_km: f64, duration_min: f64, surge: f64) -> Self {
        let distance_cost = card.per_km * distance_km;
        let time_cost = card.per_min * duration_min;
        let raw = card.base + distance_cost + time_cost + card.booking_fee;
        let surge = surge.max(1.0);

        Self {
            base: card.base,
            distance_cost,
            time_cost,
            booking_fee: card.booking_fee,
            raw,
            surge,
            total: raw * surge,
        }
    }

    pub fn total_text(&self) -> String {
        fixed_two(self.total)
    }
}

/// Two-decimal rendering; exact ties round away from zero.
pub fn fixed_two(value: f64) -> String {
    let scaled = value * 100.0;
    if scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

/// Shortest rendering of a number, `77` rather than `77.00`.
pub fn plain_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rate_card::RATE_CARDS;

    #[test]
    fn uberx_reference_trip() {
        let card = RateCard::find("uberx").unwrap();
        let fare = FareBreakdown::compute(card, 5.0, 12.0, 1.0);
        assert_eq!(fare.base, 40.0);
        assert_eq!(fare.distance_cost, 60.0);
        assert_eq!(plain_number(fare.time_cost), "21.6");
        assert_eq!(fare.booking_fee, 30.0);
        assert_eq!(plain_number(fare.raw), "151.6");
        assert_eq!(fare.total_text(), "151.60");
    }

    #[test]
    fn total_follows_formula_for_every_tier() {
        for card in RATE_CARDS.iter() {
            for (d, t, s) in [(0.0, 0.0, 1.0), (3.5, 7.0, 1.4), (12.25, 41.0, 2.0), (1.0, 1.0, 0.2)] {
                let fare = FareBreakdown::compute(card, d, t, s);
                let expected =
                    (card.base + card.per_km * d + card.per_min * t + card.booking_fee) * f64::max(1.0, s);
                assert_eq!(fare.total, expected, "{} d={d} t={t} s={s}", card.id);
            }
        }
    }

    #[test]
    fn surge_below_one_is_clamped() {
        let card = RateCard::find("uberxl").unwrap();
        let discounted = FareBreakdown::compute(card, 8.0, 20.0, 0.5);
        let flat = FareBreakdown::compute(card, 8.0, 20.0, 1.0);
        assert_eq!(discounted.surge, 1.0);
        assert_eq!(discounted.total_text(), flat.total_text());
    }

    #[test]
    fn surge_scales_raw_subtotal() {
        let card = RateCard::find("uberblack").unwrap();
        let fare = FareBreakdown::compute(card, 10.0, 30.0, 1.5);
        assert_eq!(fare.raw, 580.0);
        assert_eq!(fare.total_text(), "870.00");
    }

    #[test]
    fn fixed_two_rounds_ties_up() {
        assert_eq!(fixed_two(0.125), "0.13");
        assert_eq!(fixed_two(10.375), "10.38");
        assert_eq!(fixed_two(151.6), "151.60");
        assert_eq!(fixed_two(0.0), "0.00");
    }

    #[test]
    fn plain_number_drops_trailing_zeros() {
        assert_eq!(plain_number(77.0), "77");
        assert_eq!(plain_number(12.97), "12.97");
    }
}
