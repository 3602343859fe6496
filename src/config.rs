use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use url::Url;

use crate::{
    error::AppError, models::trip::DEFAULT_CURRENCY, services::deep_link::DEFAULT_DEEP_LINK_BASE,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub price_api_url: Url,
    pub price_api_timeout: Option<Duration>,
    pub deep_link_base: Url,
    pub default_currency: String,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let price_api_url = parse_url(
            "PRICE_API_URL",
            env::var("PRICE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/uber-price".to_string()),
        )?;

        let price_api_timeout = match env::var("PRICE_API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|err| {
                AppError::Config(format!("invalid PRICE_API_TIMEOUT_SECS: {err}"))
            })?)),
            Err(_) => None,
        };

        let deep_link_base = parse_url(
            "DEEP_LINK_BASE",
            env::var("DEEP_LINK_BASE").unwrap_or_else(|_| DEFAULT_DEEP_LINK_BASE.to_string()),
        )?;

        let default_currency =
            env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            listen_addr,
            price_api_url,
            price_api_timeout,
            deep_link_base,
            default_currency,
            static_dir,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            price_api_url: Url::parse("http://localhost:8080/api/uber-price")
                .expect("default price endpoint is a valid url"),
            price_api_timeout: None,
            deep_link_base: Url::parse(DEFAULT_DEEP_LINK_BASE)
                .expect("default deep link base is a valid url"),
            default_currency: DEFAULT_CURRENCY.to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

fn parse_url(name: &str, raw: String) -> Result<Url, AppError> {
    Url::parse(&raw).map_err(|err| AppError::Config(format!("invalid {name}: {err}")))
}
