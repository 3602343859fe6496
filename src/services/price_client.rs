use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::{
    error::AppError,
    models::price::{PriceQuote, PriceRequest},
};

/// Anything that can quote a price for a pickup/drop pair.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_price(&self, request: &PriceRequest) -> Result<PriceQuote, AppError>;
}

/// Posts trips to the remote price endpoint.
#[derive(Clone, Debug)]
pub struct PriceClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl PriceClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PriceSource for PriceClient {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_price(&self, request: &PriceRequest) -> Result<PriceQuote, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::UnexpectedStatus(status.as_u16()));
        }

        let quote: PriceQuote = response.json().await?;
        Ok(quote)
    }
}
