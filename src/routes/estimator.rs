use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::{
        fare::{plain_number, FareBreakdown},
        rate_card::RateCard,
        trip::TripInput,
    },
    services::{deep_link::build_deep_link, estimator},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(estimator_form))
        .route("/estimate", post(estimate_submit))
        .route("/clear", post(clear))
}

/// Raw field values as the browser submitted them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripForm {
    pub pickup: String,
    pub drop: String,
    pub distance: String,
    pub time: String,
    pub service: String,
    pub surge: String,
    pub currency: String,
}

impl TripForm {
    pub fn to_input(&self) -> TripInput {
        TripInput {
            pickup: self.pickup.clone(),
            drop: self.drop.clone(),
            distance_km: estimator::parse_number(&self.distance),
            duration_min: estimator::parse_number(&self.time),
            service: self.service.clone(),
            surge: estimator::parse_number(&self.surge),
            currency: self.currency.clone(),
        }
    }
}

impl From<&TripInput> for TripForm {
    fn from(input: &TripInput) -> Self {
        Self {
            pickup: input.pickup.clone(),
            drop: input.drop.clone(),
            distance: plain_number(input.distance_km),
            time: plain_number(input.duration_min),
            service: input.service.clone(),
            surge: plain_number(input.surge),
            currency: input.currency.clone(),
        }
    }
}

struct ServiceOption {
    id: &'static str,
    label: &'static str,
    selected: bool,
}

struct FareView {
    amount: String,
    summary: String,
    base: String,
    distance_cost: String,
    time_cost: String,
    booking_fee: String,
    surge: String,
    total: String,
}

impl FareView {
    fn new(card: &RateCard, fare: &FareBreakdown, input: &TripInput) -> Self {
        let currency = &input.currency;
        Self {
            amount: format!("{currency} {}", fare.total_text()),
            summary: format!(
                "{} • {} km • {} min • surge ×{}",
                card.label,
                plain_number(input.distance_km),
                plain_number(input.duration_min),
                plain_number(fare.surge)
            ),
            base: format!("{currency} {}", plain_number(fare.base)),
            distance_cost: format!("{currency} {}", plain_number(fare.distance_cost)),
            time_cost: format!("{currency} {}", plain_number(fare.time_cost)),
            booking_fee: format!("{currency} {}", plain_number(fare.booking_fee)),
            surge: format!("×{}", plain_number(fare.surge)),
            total: format!("{currency} {}", fare.total_text()),
        }
    }
}

#[derive(Template)]
#[template(path = "estimator.html")]
struct EstimatorTemplate {
    form: TripForm,
    services: Vec<ServiceOption>,
    fare: Option<FareView>,
    deep_link: String,
}

fn render(state: &AppState, form: TripForm, fare: Option<FareView>) -> Response {
    let services = RateCard::all()
        .iter()
        .map(|card| ServiceOption {
            id: card.id,
            label: card.label,
            selected: card.id == form.service,
        })
        .collect();
    let deep_link = build_deep_link(&state.config.deep_link_base, &form.pickup, &form.drop);

    AskamaTemplateResponse::into_response(EstimatorTemplate {
        form,
        services,
        fare,
        deep_link,
    })
}

async fn estimator_form(State(state): State<AppState>) -> Response {
    let input = TripInput::with_currency(state.config.default_currency.clone());
    render(&state, TripForm::from(&input), None)
}

async fn estimate_submit(
    State(state): State<AppState>,
    Form(form): Form<TripForm>,
) -> Result<Response, AppError> {
    let input = form.to_input();
    let (card, fare) = estimator::estimate(&input)?;
    let view = FareView::new(card, &fare, &input);
    Ok(render(&state, form, Some(view)))
}

async fn clear() -> impl IntoResponse {
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_become_trip_input() {
        let form = TripForm {
            pickup: "12.97,77.59".into(),
            drop: "Koramangala".into(),
            distance: "7.5".into(),
            time: "".into(),
            service: "uberxl".into(),
            surge: "abc".into(),
            currency: "USD".into(),
        };
        let input = form.to_input();
        assert_eq!(input.distance_km, 7.5);
        assert_eq!(input.duration_min, 0.0);
        assert_eq!(input.surge, 0.0);
        assert_eq!(input.service, "uberxl");
        assert_eq!(input.currency, "USD");
    }

    #[test]
    fn default_form_matches_default_trip() {
        let form = TripForm::from(&TripInput::default());
        assert_eq!(form.distance, "5");
        assert_eq!(form.time, "12");
        assert_eq!(form.surge, "1");
        assert_eq!(form.service, "uberx");
        assert_eq!(form.currency, "INR");
        assert_eq!(form.to_input(), TripInput::default());
    }

    #[test]
    fn fare_view_shows_raw_parts_and_fixed_total() {
        let input = TripInput::default();
        let (card, fare) = estimator::estimate(&input).unwrap();
        let view = FareView::new(card, &fare, &input);
        assert_eq!(view.amount, "INR 151.60");
        assert_eq!(view.time_cost, "INR 21.6");
        assert_eq!(view.base, "INR 40");
        assert_eq!(view.surge, "×1");
        assert_eq!(view.summary, "UberX • 5 km • 12 min • surge ×1");
    }
}
