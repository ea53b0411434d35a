use crate::geo::GeoPoint;

/// A single search result of an address lookup.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AddressCandidate {
    /// Stable identifier assigned by the provider.
    pub id    : String,
    pub label : String,
    /// Absent if the provider did not return any geometry.
    pub pos   : Option<GeoPoint>,
}

impl AddressCandidate {
    pub fn has_position(&self) -> bool {
        self.pos.is_some()
    }
}
