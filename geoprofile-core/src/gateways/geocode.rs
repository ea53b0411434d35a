use crate::entities::{AddressCandidate, GeoPoint};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub text: &'a str,
    /// Maximum number of ranked results.
    pub limit: usize,
}

/// Failures of an external geocoding provider.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Geocoding provider is not reachable: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("Geocoding provider responded with HTTP status {0}")]
    Status(u16),
    #[error("Malformed geocoding response: {0}")]
    Payload(#[source] anyhow::Error),
}

/// Free-text address search.
pub trait AddressSearchGateway {
    /// Returns the candidates in the order ranked by the provider.
    fn search(&self, query: SearchQuery<'_>) -> Result<Vec<AddressCandidate>, Error>;
}

pub trait ReverseGeocodingGateway {
    /// Returns `None` if the provider found nothing at this position.
    fn reverse(&self, pos: GeoPoint) -> Result<Option<String>, Error>;
}
