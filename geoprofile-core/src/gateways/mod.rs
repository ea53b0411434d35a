pub mod geocode;
pub mod monitor;
