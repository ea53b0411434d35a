pub mod prelude {
    pub use crate::{
        entities::*,
        gateways::{
            geocode::{self, AddressSearchGateway, ReverseGeocodingGateway, SearchQuery},
            monitor::{GeocodingEvent, GeocodingMonitor},
        },
        proximity::*,
        repositories::{Error as RepoError, ProfileRepo},
        resolver::*,
        usecases,
    };
    pub use geoprofile_entities::builders::Builder;
    use std::{cell::RefCell, collections::HashMap};

    pub fn paris() -> GeoPoint {
        GeoPoint::from_lat_lng_deg(48.8566, 2.3522)
    }

    pub fn versailles() -> GeoPoint {
        GeoPoint::from_lat_lng_deg(48.8049, 2.1204)
    }

    pub fn lyon() -> GeoPoint {
        GeoPoint::from_lat_lng_deg(45.7640, 4.8357)
    }

    pub fn candidate(id: &str, label: &str, pos: Option<GeoPoint>) -> AddressCandidate {
        AddressCandidate {
            id: id.into(),
            label: label.into(),
            pos,
        }
    }

    pub fn identity(email: &str) -> Identity {
        Identity::new(EmailAddress::new_unchecked(email.into()))
    }

    #[derive(Default)]
    pub struct MockGeocoder {
        candidates: Vec<AddressCandidate>,
        reverse_label: Option<String>,
        fail: bool,
        search_calls: RefCell<usize>,
        last_query: RefCell<Option<(String, usize)>>,
    }

    impl MockGeocoder {
        pub fn with_candidates(candidates: Vec<AddressCandidate>) -> Self {
            Self {
                candidates,
                ..Default::default()
            }
        }

        pub fn with_reverse_label(label: Option<&str>) -> Self {
            Self {
                reverse_label: label.map(ToOwned::to_owned),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn search_calls(&self) -> usize {
            *self.search_calls.borrow()
        }

        pub fn last_query(&self) -> Option<(String, usize)> {
            self.last_query.borrow().clone()
        }
    }

    impl AddressSearchGateway for MockGeocoder {
        fn search(&self, query: SearchQuery<'_>) -> Result<Vec<AddressCandidate>, geocode::Error> {
            *self.search_calls.borrow_mut() += 1;
            *self.last_query.borrow_mut() = Some((query.text.to_owned(), query.limit));
            if self.fail {
                return Err(geocode::Error::Status(503));
            }
            Ok(self
                .candidates
                .iter()
                .take(query.limit)
                .cloned()
                .collect())
        }
    }

    impl ReverseGeocodingGateway for MockGeocoder {
        fn reverse(&self, _: GeoPoint) -> Result<Option<String>, geocode::Error> {
            if self.fail {
                return Err(geocode::Error::Status(503));
            }
            Ok(self.reverse_label.clone())
        }
    }

    #[derive(Default)]
    pub struct RecordingMonitor {
        events: RefCell<Vec<&'static str>>,
    }

    impl RecordingMonitor {
        pub fn events(&self) -> Vec<&'static str> {
            self.events.borrow().clone()
        }
    }

    impl GeocodingMonitor for RecordingMonitor {
        fn report(&self, event: GeocodingEvent<'_>) {
            let kind = match event {
                GeocodingEvent::SuggestionsFailed { .. } => "suggestions-failed",
                GeocodingEvent::ResolutionFailed { .. } => "resolution-failed",
                GeocodingEvent::ReverseLookupFailed { .. } => "reverse-lookup-failed",
                GeocodingEvent::ReverseLookupEmpty { .. } => "reverse-lookup-empty",
            };
            self.events.borrow_mut().push(kind);
        }
    }

    #[derive(Default)]
    pub struct MockDb {
        pub profiles: RefCell<HashMap<String, Profile>>,
    }

    impl ProfileRepo for MockDb {
        fn get_profile_by_email(&self, email: &EmailAddress) -> Result<Profile, RepoError> {
            self.profiles
                .borrow()
                .get(email.as_str())
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn save_profile(&self, profile: &Profile) -> Result<(), RepoError> {
            self.profiles
                .borrow_mut()
                .insert(profile.email.as_str().to_owned(), profile.clone());
            Ok(())
        }
    }
}

use self::prelude::*;

#[test]
fn check_address_within_radius() {
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Versailles", Some(versailles()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let outcome =
        usecases::check_address(&resolver, &ProximityValidator::default(), "Versailles").unwrap();
    assert_eq!(ValidationOutcome::Accepted, outcome);
}

#[test]
fn check_address_too_far_away() {
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Lyon", Some(lyon()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let outcome =
        usecases::check_address(&resolver, &ProximityValidator::default(), "Lyon").unwrap();
    match outcome {
        ValidationOutcome::RejectedTooFar(d) => assert!((d.to_km() - 392.0).abs() < 1.0),
        _ => panic!("Unexpected outcome: {outcome:?}"),
    }
}

#[test]
fn check_unresolvable_address() {
    let geo = MockGeocoder::with_candidates(vec![]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let outcome =
        usecases::check_address(&resolver, &ProximityValidator::default(), "nowhere").unwrap();
    assert_eq!(ValidationOutcome::RejectedUnresolvable, outcome);
}

#[test]
fn check_address_with_failing_provider() {
    let geo = MockGeocoder::failing();
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let err = usecases::check_address(&resolver, &ProximityValidator::default(), "Paris")
        .unwrap_err();
    assert!(matches!(err, usecases::Error::GeocodingUnavailable(_)));
}

#[test]
fn load_empty_profile_of_new_user() {
    let db = MockDb::default();
    let profile = usecases::load_profile(&db, &identity("new@example.com")).unwrap();
    assert_eq!(Profile::empty(EmailAddress::new_unchecked("new@example.com".into())), profile);
}

#[test]
fn load_stored_profile() {
    let db = MockDb::default();
    let stored = Profile::build().email("jane@example.com").finish();
    db.save_profile(&stored).unwrap();
    let profile = usecases::load_profile(&db, &identity("jane@example.com")).unwrap();
    assert_eq!(stored, profile);
}

#[test]
fn submit_valid_profile() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Paris", Some(paris()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build()
        .email("jane@example.com")
        .phone("06 12 34 56 78")
        .finish();
    let saved = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("jane@example.com"),
        profile,
    )
    .unwrap();
    assert_eq!("0612345678", saved.phone);
    assert_eq!(Some(&saved), db.profiles.borrow().get("jane@example.com"));
}

#[test]
fn submit_profile_of_another_user() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Paris", Some(paris()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build().email("jane@example.com").finish();
    let err = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("john@example.com"),
        profile,
    )
    .unwrap_err();
    assert!(matches!(err, usecases::Error::Forbidden));
    assert!(db.profiles.borrow().is_empty());
}

#[test]
fn submit_own_profile_with_different_letter_case() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Paris", Some(paris()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build().email("jane@example.com").finish();
    let identity = identity("Jane@Example.com");
    let saved = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity,
        profile,
    )
    .unwrap();
    assert_eq!(identity.email, saved.email);
    assert_eq!(saved, usecases::load_profile(&db, &identity).unwrap());
}

#[test]
fn submit_invalid_profile_without_geocoding() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Paris", Some(paris()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build()
        .email("jane@example.com")
        .first_name("J4ne")
        .finish();
    let err = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("jane@example.com"),
        profile,
    )
    .unwrap_err();
    assert!(matches!(err, usecases::Error::Profile(_)));
    assert_eq!(0, geo.search_calls());
    assert!(db.profiles.borrow().is_empty());
}

#[test]
fn submit_profile_with_unknown_address() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build().email("jane@example.com").finish();
    let err = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("jane@example.com"),
        profile,
    )
    .unwrap_err();
    assert!(matches!(err, usecases::Error::AddressInvalid));
    assert!(db.profiles.borrow().is_empty());
}

#[test]
fn submit_profile_with_address_too_far_away() {
    let db = MockDb::default();
    let geo = MockGeocoder::with_candidates(vec![candidate("1", "Lyon", Some(lyon()))]);
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build()
        .email("jane@example.com")
        .address("Place Bellecour, Lyon")
        .finish();
    let err = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("jane@example.com"),
        profile,
    )
    .unwrap_err();
    match err {
        usecases::Error::AddressTooFar {
            distance,
            max_distance,
        } => {
            assert!(distance.to_km() > 391.0);
            assert_eq!(Distance::from_km(50.0), max_distance);
        }
        _ => panic!("Unexpected error: {err}"),
    }
    assert!(db.profiles.borrow().is_empty());
}

#[test]
fn submit_profile_while_provider_is_down() {
    let db = MockDb::default();
    let geo = MockGeocoder::failing();
    let monitor = RecordingMonitor::default();
    let resolver = AddressResolver::new(&geo, &geo, &monitor);
    let profile = Profile::build().email("jane@example.com").finish();
    let err = usecases::submit_profile(
        &db,
        &resolver,
        &ProximityValidator::default(),
        &identity("jane@example.com"),
        profile,
    )
    .unwrap_err();
    assert!(matches!(err, usecases::Error::GeocodingUnavailable(_)));
    assert!(db.profiles.borrow().is_empty());
}
