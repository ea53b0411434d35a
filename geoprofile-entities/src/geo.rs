use std::{fmt, str::FromStr};
use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical position in decimal degrees (WGS-84).
///
/// Both coordinates are always within their valid range,
/// i.e. latitude in [-90, 90] and longitude in [-180, 180].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn lat(self) -> f64 {
        self.lat
    }

    pub fn lng(self) -> f64 {
        self.lng
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    pub fn is_valid_lat_deg(lat: f64) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
    }

    pub fn is_valid_lng_deg(lng: f64) -> bool {
        (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
    }

    /// Panics in debug builds if the coordinates are out of range.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let (lat, lng) = (lat.into(), lng.into());
        debug_assert!(Self::is_valid_lat_deg(lat));
        debug_assert!(Self::is_valid_lng_deg(lng));
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, GeoPointError> {
        let (lat, lng) = (lat.into(), lng.into());
        if !Self::is_valid_lat_deg(lat) {
            return Err(GeoPointError::Latitude(lat));
        }
        if !Self::is_valid_lng_deg(lng) {
            return Err(GeoPointError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
    #[error("Failed to parse position: {0}")]
    Parse(String),
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_str, lng_str) = s
            .split_once(',')
            .ok_or_else(|| GeoPointError::Parse(s.to_owned()))?;
        match (lat_str.trim().parse::<f64>(), lng_str.trim().parse::<f64>()) {
            (Ok(lat), Ok(lng)) => Self::try_from_lat_lng_deg(lat, lng),
            _ => Err(GeoPointError::Parse(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} km", self.to_km())
    }
}

// The earth's mean radius in kilometers.
const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

impl GeoPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance(p1: GeoPoint, p2: GeoPoint) -> Distance {
        let (lat1_rad, _) = p1.to_lat_lng_rad();
        let (lat2_rad, _) = p2.to_lat_lng_rad();
        let dlat = (p2.lat - p1.lat).to_radians();
        let dlng = (p2.lng - p1.lng).to_radians();

        let dlat_sin = (dlat / 2.0).sin();
        let dlng_sin = (dlng / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_km(MEAN_EARTH_RADIUS_KM * c)
    }
}
