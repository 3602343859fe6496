use url::Url;

use crate::{
    models::fare::plain_number,
    services::location::{parse_coordinate, Coordinate},
};

pub const DEFAULT_DEEP_LINK_BASE: &str = "https://m.uber.com/ul/";

/// Builds the ride-request link for the given pickup and drop text.
///
/// Coordinates become `latitude`/`longitude` pairs, other non-empty text a
/// `formatted_address`. An empty pickup asks the app for the current location,
/// an empty drop is left out.
pub fn build_deep_link(base: &Url, pickup: &str, drop: &str) -> String {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("action", "setPickup");

        match parse_coordinate(pickup) {
            Some(coordinate) => append_coordinate(&mut query, "pickup", coordinate),
            None if !pickup.is_empty() => {
                query.append_pair("pickup[formatted_address]", pickup);
            }
            None => {
                query.append_pair("pickup", "true");
            }
        }

        match parse_coordinate(drop) {
            Some(coordinate) => append_coordinate(&mut query, "dropoff", coordinate),
            None if !drop.is_empty() => {
                query.append_pair("dropoff[formatted_address]", drop);
            }
            None => {}
        }
    }
    url.into()
}

fn append_coordinate(
    query: &mut url::form_urlencoded::Serializer<'_, url::UrlQuery<'_>>,
    prefix: &str,
    coordinate: Coordinate,
) {
    query.append_pair(
        &format!("{prefix}[latitude]"),
        &plain_number(coordinate.lat),
    );
    query.append_pair(
        &format!("{prefix}[longitude]"),
        &plain_number(coordinate.lng),
    );
}
