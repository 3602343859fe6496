use tracing::debug;

use crate::{
    error::AppError,
    models::{fare::FareBreakdown, rate_card::RateCard, trip::TripInput},
};

/// Computes the breakdown for a trip. Negative or non-finite amounts count as zero.
pub fn estimate(input: &TripInput) -> Result<(&'static RateCard, FareBreakdown), AppError> {
    let card = RateCard::find(&input.service)
        .ok_or_else(|| AppError::UnknownService(input.service.clone()))?;

    let fare = FareBreakdown::compute(
        card,
        non_negative(input.distance_km),
        non_negative(input.duration_min),
        finite_or_zero(input.surge),
    );
    debug!(service = card.id, total = fare.total, "estimated fare");

    Ok((card, fare))
}

/// Reads a numeric form field. Anything that is not a finite number becomes 0.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates_default_trip() {
        let (card, fare) = estimate(&TripInput::default()).unwrap();
        assert_eq!(card.label, "UberX");
        assert_eq!(fare.total_text(), "151.60");
    }

    #[test]
    fn unknown_service_is_rejected() {
        let input = TripInput {
            service: "helicopter".into(),
            ..TripInput::default()
        };
        assert!(matches!(estimate(&input), Err(AppError::UnknownService(id)) if id == "helicopter"));
    }

    #[test]
    fn negative_and_nan_amounts_count_as_zero() {
        let input = TripInput {
            distance_km: -4.0,
            duration_min: f64::NAN,
            surge: f64::INFINITY,
            ..TripInput::default()
        };
        let (_, fare) = estimate(&input).unwrap();
        assert_eq!(fare.distance_cost, 0.0);
        assert_eq!(fare.time_cost, 0.0);
        assert_eq!(fare.surge, 1.0);
        assert_eq!(fare.total_text(), "70.00");
    }

    #[test]
    fn parses_numeric_fields_leniently() {
        assert_eq!(parse_number(" 5 "), 5.0);
        assert_eq!(parse_number("0.75"), 0.75);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }
}
