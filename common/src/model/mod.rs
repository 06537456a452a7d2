pub mod bill;
pub mod card;
pub mod config;
pub mod hass;
