use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{extract::State, response::Response, routing::get, Form, Router};
use serde::Deserialize;
use tracing::error;

use crate::{
    models::{fare::plain_number, price::PriceRequest},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/price", get(price_form).post(price_submit))
}

#[derive(Template)]
#[template(path = "price.html")]
struct PriceTemplate {
    pickup: String,
    drop: String,
    price: Option<String>,
}

#[derive(Deserialize)]
struct PriceForm {
    pickup: String,
    drop: String,
    #[serde(default)]
    last_price: Option<String>,
}

async fn price_form() -> Response {
    AskamaTemplateResponse::into_response(PriceTemplate {
        pickup: String::new(),
        drop: String::new(),
        price: None,
    })
}

/// A failed lookup keeps whatever price the page was already showing.
async fn price_submit(State(state): State<AppState>, Form(form): Form<PriceForm>) -> Response {
    let request = PriceRequest {
        pickup: form.pickup,
        drop: form.drop,
    };

    let price = match state.prices.fetch_price(&request).await {
        Ok(quote) => Some(plain_number(quote.price)),
        Err(err) => {
            error!("error fetching price: {err}");
            normalize_optional(form.last_price)
        }
    };

    AskamaTemplateResponse::into_response(PriceTemplate {
        pickup: request.pickup,
        drop: request.drop,
        price,
    })
}

fn normalize_optional(input: Option<String>) -> Option<String> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
