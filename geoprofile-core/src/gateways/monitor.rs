use super::geocode::Error;
use crate::entities::GeoPoint;

#[derive(Debug)]
pub enum GeocodingEvent<'a> {
    SuggestionsFailed {
        query: &'a str,
        error: &'a Error,
    },
    ResolutionFailed {
        label: &'a str,
        error: &'a Error,
    },
    ReverseLookupFailed {
        pos: GeoPoint,
        error: &'a Error,
    },
    ReverseLookupEmpty {
        pos: GeoPoint,
    },
}

/// Receives failures that are absorbed instead of being returned to the caller.
pub trait GeocodingMonitor {
    fn report(&self, event: GeocodingEvent<'_>);
}
