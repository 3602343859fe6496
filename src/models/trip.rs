use serde::{Deserialize, Serialize};

use crate::models::rate_card::DEFAULT_SERVICE;

pub const DEFAULT_CURRENCY: &str = "INR";

/// Everything the user entered for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripInput {
    pub pickup: String,
    pub drop: String,
    pub distance_km: f64,
    pub duration_min: f64,
    pub service: String,
    pub surge: f64,
    pub currency: String,
}

impl Default for TripInput {
    fn default() -> Self {
        Self {
            pickup: String::new(),
            drop: String::new(),
            distance_km: 5.0,
            duration_min: 12.0,
            service: DEFAULT_SERVICE.into(),
            surge: 1.0,
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl TripInput {
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }
}
