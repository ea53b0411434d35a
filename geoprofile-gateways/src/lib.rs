pub mod geocoding;
pub mod monitor;
pub mod profile_store;
