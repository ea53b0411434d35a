use crate::{
    entities::*,
    gateways::{
        geocode::{self, AddressSearchGateway, ReverseGeocodingGateway, SearchQuery},
        monitor::{GeocodingEvent, GeocodingMonitor},
    },
};
use thiserror::Error;

/// Shorter queries are not sent to the provider.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 3;

pub const MAX_SUGGESTIONS: usize = 5;

pub const UNKNOWN_ADDRESS: &str = "Unknown Address";

#[derive(Debug, Error)]
pub enum ResolutionFailure {
    #[error("No matching address found")]
    NoMatch,
    #[error(transparent)]
    ProviderError(#[from] geocode::Error),
}

/// Translates between free-text addresses and positions.
pub struct AddressResolver<'a> {
    search: &'a dyn AddressSearchGateway,
    reverse: &'a dyn ReverseGeocodingGateway,
    monitor: &'a dyn GeocodingMonitor,
}

impl<'a> AddressResolver<'a> {
    pub fn new(
        search: &'a dyn AddressSearchGateway,
        reverse: &'a dyn ReverseGeocodingGateway,
        monitor: &'a dyn GeocodingMonitor,
    ) -> Self {
        Self {
            search,
            reverse,
            monitor,
        }
    }

    /// Ranked address suggestions for a partially typed address.
    ///
    /// Failures are reported to the monitor and result in an empty list.
    pub fn suggest(&self, query: &str) -> Vec<AddressCandidate> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return vec![];
        }
        let search_query = SearchQuery {
            text: query,
            limit: MAX_SUGGESTIONS,
        };
        match self.search.search(search_query) {
            Ok(mut candidates) => {
                log::debug!("Found {} suggestions for '{query}'", candidates.len());
                candidates.truncate(MAX_SUGGESTIONS);
                candidates
            }
            Err(error) => {
                self.monitor
                    .report(GeocodingEvent::SuggestionsFailed { query, error: &error });
                vec![]
            }
        }
    }

    /// Resolves the position of the best matching address.
    pub fn resolve(&self, label: &str) -> Result<GeoPoint, ResolutionFailure> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ResolutionFailure::NoMatch);
        }
        let search_query = SearchQuery {
            text: label,
            limit: 1,
        };
        let candidates = self.search.search(search_query).map_err(|error| {
            self.monitor
                .report(GeocodingEvent::ResolutionFailed { label, error: &error });
            error
        })?;
        let pos = candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.pos)
            .ok_or(ResolutionFailure::NoMatch)?;
        log::debug!("Resolved address location '{label}': {pos}");
        Ok(pos)
    }

    /// A human-readable label for a position, e.g. picked on a map.
    ///
    /// Returns [`UNKNOWN_ADDRESS`] if no label could be found.
    pub fn reverse_resolve(&self, pos: GeoPoint) -> String {
        match self.reverse.reverse(pos) {
            Ok(Some(label)) if !label.trim().is_empty() => label,
            Ok(_) => {
                self.monitor
                    .report(GeocodingEvent::ReverseLookupEmpty { pos });
                UNKNOWN_ADDRESS.to_string()
            }
            Err(error) => {
                self.monitor
                    .report(GeocodingEvent::ReverseLookupFailed { pos, error: &error });
                UNKNOWN_ADDRESS.to_string()
            }
        }
    }
}
