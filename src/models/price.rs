use serde::{Deserialize, Serialize};

/// Body posted to the remote price endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub pickup: String,
    pub drop: String,
}

/// Body expected back from the remote price endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
}
