use super::*;
use e::{
    address::AddressCandidate, email::EmailAddressParseError, geo::GeoPoint, identity::Identity,
    profile as ep,
};
use geoprofile_entities as e;

impl From<GeoPoint> for Coordinate {
    fn from(from: GeoPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl TryFrom<Coordinate> for GeoPoint {
    type Error = e::geo::GeoPointError;
    fn try_from(from: Coordinate) -> Result<Self, Self::Error> {
        GeoPoint::try_from_lat_lng_deg(from.lat, from.lng)
    }
}

impl From<AddressCandidate> for AddressSuggestion {
    fn from(from: AddressCandidate) -> Self {
        let AddressCandidate { id, label, pos } = from;
        Self {
            id,
            label,
            lat: pos.map(GeoPoint::lat),
            lng: pos.map(GeoPoint::lng),
        }
    }
}

impl From<ep::Profile> for Profile {
    fn from(from: ep::Profile) -> Self {
        let ep::Profile {
            email,
            first_name,
            last_name,
            phone,
            date_of_birth,
            address,
        } = from;
        Self {
            first_name,
            last_name,
            email: email.into_string(),
            phone,
            dob: date_of_birth
                .map(ep::format_date_of_birth)
                .unwrap_or_default(),
            address,
        }
    }
}

// An unparsable date of birth is dropped and
// reported by the profile validation later on.
impl TryFrom<Profile> for ep::Profile {
    type Error = EmailAddressParseError;
    fn try_from(from: Profile) -> Result<Self, Self::Error> {
        let Profile {
            first_name,
            last_name,
            email,
            phone,
            dob,
            address,
        } = from;
        Ok(Self {
            email: email.parse()?,
            first_name,
            last_name,
            phone,
            date_of_birth: ep::parse_date_of_birth(&dob).ok(),
            address,
        })
    }
}

impl From<Identity> for Session {
    fn from(from: Identity) -> Self {
        let initial = from.initial().to_string();
        let Identity {
            email,
            display_name,
            avatar_url,
        } = from;
        Self {
            email: email.into_string(),
            display_name,
            avatar_url,
            initial,
        }
    }
}
