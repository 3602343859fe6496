use std::sync::Arc;

use ride_fare::config::AppConfig;
use ride_fare::error::AppError;
use ride_fare::routes::create_router;
use ride_fare::services::price_client::PriceClient;
use ride_fare::state::AppState;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;

    let prices = PriceClient::new(config.price_api_url.clone(), config.price_api_timeout)?;
    info!("remote prices from {}", prices.endpoint());

    let state = AppState::new(config.clone(), Arc::new(prices));
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,ride_fare=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
