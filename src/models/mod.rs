pub mod fare;
pub mod price;
pub mod rate_card;
pub mod trip;
