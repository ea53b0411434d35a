use crate::entities::{Distance, GeoPoint};

/// Result of checking an address against the allowed area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    Accepted,
    RejectedTooFar(Distance),
    RejectedUnresolvable,
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Restricts addresses to a circle around a reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityValidator {
    reference_point: GeoPoint,
    max_distance: Distance,
}

pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

// Paris
pub const DEFAULT_REFERENCE_POINT_DEG: (f64, f64) = (48.8566, 2.3522);

impl ProximityValidator {
    pub const fn new(reference_point: GeoPoint, max_distance: Distance) -> Self {
        Self {
            reference_point,
            max_distance,
        }
    }

    pub const fn reference_point(&self) -> GeoPoint {
        self.reference_point
    }

    pub const fn max_distance(&self) -> Distance {
        self.max_distance
    }

    pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
        GeoPoint::distance(a, b).to_km()
    }

    pub fn validate(&self, candidate: GeoPoint) -> ValidationOutcome {
        let distance = GeoPoint::distance(self.reference_point, candidate);
        if distance <= self.max_distance {
            ValidationOutcome::Accepted
        } else {
            ValidationOutcome::RejectedTooFar(distance)
        }
    }
}

impl Default for ProximityValidator {
    fn default() -> Self {
        let (lat, lng) = DEFAULT_REFERENCE_POINT_DEG;
        Self::new(
            GeoPoint::from_lat_lng_deg(lat, lng),
            Distance::from_km(DEFAULT_MAX_DISTANCE_KM),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> GeoPoint {
        GeoPoint::from_lat_lng_deg(48.8566, 2.3522)
    }

    fn lyon() -> GeoPoint {
        GeoPoint::from_lat_lng_deg(45.7640, 4.8357)
    }

    #[test]
    fn accept_reference_point_itself() {
        let validator = ProximityValidator::default();
        assert_eq!(ValidationOutcome::Accepted, validator.validate(paris()));
        assert_eq!(0.0, ProximityValidator::distance_km(paris(), paris()));
    }

    #[test]
    fn accept_nearby_address() {
        let versailles = GeoPoint::from_lat_lng_deg(48.8049, 2.1204);
        assert!(ProximityValidator::default()
            .validate(versailles)
            .is_accepted());
    }

    #[test]
    fn reject_lyon_from_paris() {
        let validator = ProximityValidator::new(paris(), Distance::from_km(50.0));
        match validator.validate(lyon()) {
            ValidationOutcome::RejectedTooFar(d) => {
                assert!(d.to_km() > 391.0);
                assert!(d.to_km() < 393.0);
            }
            outcome => panic!("Unexpected outcome: {outcome:?}"),
        }
    }

    #[test]
    fn accept_on_the_boundary() {
        let d = GeoPoint::distance(paris(), lyon());
        let validator = ProximityValidator::new(paris(), d);
        assert!(validator.validate(lyon()).is_accepted());
    }

    #[test]
    fn symetric_distance_km() {
        let ab = ProximityValidator::distance_km(paris(), lyon());
        let ba = ProximityValidator::distance_km(lyon(), paris());
        assert!((ab - ba).abs() < 1e-9);
    }
}
