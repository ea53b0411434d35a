use geoprofile_core::gateways::monitor::{GeocodingEvent, GeocodingMonitor};

/// Reports absorbed geocoding failures to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl GeocodingMonitor for LogMonitor {
    fn report(&self, event: GeocodingEvent<'_>) {
        use GeocodingEvent as E;
        match event {
            E::SuggestionsFailed { query, error } => {
                log::warn!("Failed to fetch address suggestions for '{query}': {error}");
            }
            E::ResolutionFailed { label, error } => {
                log::warn!("Failed to resolve address location '{label}': {error}");
            }
            E::ReverseLookupFailed { pos, error } => {
                log::warn!("Failed to fetch address of {pos}: {error}");
            }
            E::ReverseLookupEmpty { pos } => {
                log::debug!("No address found at {pos}");
            }
        }
    }
}
