use std::sync::Arc;

use crate::{config::AppConfig, services::price_client::PriceSource};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub prices: Arc<dyn PriceSource>,
}

impl AppState {
    pub fn new(config: AppConfig, prices: Arc<dyn PriceSource>) -> Self {
        Self { config, prices }
    }
}
