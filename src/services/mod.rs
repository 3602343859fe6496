pub mod deep_link;
pub mod estimator;
pub mod location;
pub mod price_client;
