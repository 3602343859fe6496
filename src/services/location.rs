use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Reads `"lat,lng"`. `None` means the text should be used as an address.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let mut parts = text.split(',').map(str::trim);
    let lat = parse_component(parts.next()?)?;
    let lng = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate { lat, lng })
}

fn parse_component(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
