use std::{collections::HashMap, sync::Arc};

use geoprofile_core::{
    entities::{EmailAddress, Identity},
    repositories::ProfileRepo,
    util::sequence::RequestSequence,
};
use parking_lot::Mutex;
use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use super::api::ApiError;

// Set by the authenticating reverse proxy
pub const HEADER_EMAIL: &str = "X-Forwarded-Email";
pub const HEADER_DISPLAY_NAME: &str = "X-Forwarded-Preferred-Username";
pub const HEADER_AVATAR_URL: &str = "X-Forwarded-Avatar-Url";

type Result<T> = std::result::Result<T, ApiError>;

pub struct Profiles(pub Arc<dyn ProfileRepo + Send + Sync>);

pub struct Version(pub &'static str);

/// The identity of the user as established by the authentication provider.
#[derive(Debug)]
pub struct Auth {
    identity: Option<Identity>,
}

impl Auth {
    pub fn identity(&self) -> Result<&Identity> {
        self.identity.as_ref().ok_or(ApiError::Unauthorized)
    }

    fn header_value<'r>(request: &'r Request, name: &str) -> Option<&'r str> {
        request
            .headers()
            .get_one(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn identity_from_headers(request: &Request) -> Option<Identity> {
        let email = Self::header_value(request, HEADER_EMAIL)?;
        let email = email
            .parse::<EmailAddress>()
            .map_err(|err| debug!("Invalid identity '{email}': {err}"))
            .ok()?;
        let display_name = Self::header_value(request, HEADER_DISPLAY_NAME).map(ToOwned::to_owned);
        let avatar_url = Self::header_value(request, HEADER_AVATAR_URL).map(ToOwned::to_owned);
        Some(Identity {
            email,
            display_name,
            avatar_url,
        })
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let identity = Self::identity_from_headers(request);
        Outcome::Success(Self { identity })
    }
}

/// Keeps track of the latest suggestion request of each user.
///
/// Sequences of users without a pending request are dropped
/// whenever a new user shows up.
#[derive(Default, Clone)]
pub struct SuggestionSequences(Arc<Mutex<HashMap<EmailAddress, Arc<RequestSequence>>>>);

impl SuggestionSequences {
    pub fn of(&self, email: &EmailAddress) -> Arc<RequestSequence> {
        let mut sequences = self.0.lock();
        if let Some(sequence) = sequences.get(email) {
            return Arc::clone(sequence);
        }
        sequences.retain(|_, sequence| Arc::strong_count(sequence) > 1);
        Arc::clone(sequences.entry(email.clone()).or_default())
    }
}
