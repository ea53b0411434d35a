// Low-level persistence traits.
// Profiles are stored as opaque documents keyed by
// the email address of their owner.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ProfileRepo {
    fn get_profile_by_email(&self, email: &EmailAddress) -> Result<Profile>;

    /// Creates or replaces the profile of `profile.email`.
    fn save_profile(&self, profile: &Profile) -> Result<()>;

    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        match self.get_profile_by_email(email) {
            Ok(profile) => Ok(Some(profile)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
