use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{fare::FareBreakdown, rate_card::RateCard, trip::TripInput},
    services::{deep_link::build_deep_link, estimator},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(services))
        .route("/estimate", post(estimate))
}

async fn services() -> Json<&'static [RateCard]> {
    Json(RateCard::all())
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub service: &'static str,
    pub label: &'static str,
    pub currency: String,
    pub breakdown: FareBreakdown,
    pub total: String,
    pub deep_link: String,
}

async fn estimate(
    State(state): State<AppState>,
    Json(input): Json<TripInput>,
) -> Result<Json<EstimateResponse>, AppError> {
    let (card, breakdown) = estimator::estimate(&input)?;
    Ok(Json(EstimateResponse {
        service: card.id,
        label: card.label,
        currency: input.currency,
        total: breakdown.total_text(),
        breakdown,
        deep_link: build_deep_link(&state.config.deep_link_base, &input.pickup, &input.drop),
    }))
}
