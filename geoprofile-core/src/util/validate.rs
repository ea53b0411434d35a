use crate::entities::Profile;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use time::{Date, Month, OffsetDateTime};

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

lazy_static! {
    static ref PERSON_NAME_REGEX: Regex = Regex::new(r"^\p{L}+(?:[ '’-]\p{L}+)*$").unwrap();
    // French numbers in national or international format
    static ref PHONE_NR_REGEX: Regex = Regex::new(r"^(?:\+33|0)[1-9][0-9]{8}$").unwrap();
}

pub fn is_valid_person_name(s: &str) -> bool {
    PERSON_NAME_REGEX.is_match(s)
}

pub fn is_valid_phone_nr(s: &str) -> bool {
    PHONE_NR_REGEX.is_match(s)
}

fn earliest_date_of_birth() -> Date {
    Date::from_calendar_date(1900, Month::January, 1).unwrap_or(Date::MIN)
}

pub fn is_valid_date_of_birth(date: Date, today: Date) -> bool {
    date >= earliest_date_of_birth() && date <= today
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileInvalidation {
    #[error("Please enter a valid first name")]
    FirstName,
    #[error("Please enter a valid last name")]
    LastName,
    #[error("Please enter a valid French phone number")]
    Phone,
    #[error("Please enter a valid date of birth")]
    DateOfBirth,
    #[error("Please enter an address")]
    Address,
}

impl ProfileInvalidation {
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::DateOfBirth => "dob",
            Self::Address => "address",
        }
    }
}

/// All invalid fields of a profile.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid profile: {}", display_invalidations(.0))]
pub struct ProfileInvalidations(pub Vec<ProfileInvalidation>);

fn display_invalidations(invalidations: &[ProfileInvalidation]) -> impl fmt::Display + '_ {
    struct Fields<'a>(&'a [ProfileInvalidation]);
    impl fmt::Display for Fields<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (i, invalidation) in self.0.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(invalidation.field_name())?;
            }
            Ok(())
        }
    }
    Fields(invalidations)
}

pub fn validate_profile_at(profile: &Profile, today: Date) -> Result<(), ProfileInvalidations> {
    let mut invalid = vec![];
    if !is_valid_person_name(&profile.first_name) {
        invalid.push(ProfileInvalidation::FirstName);
    }
    if !is_valid_person_name(&profile.last_name) {
        invalid.push(ProfileInvalidation::LastName);
    }
    if !is_valid_phone_nr(&profile.phone) {
        invalid.push(ProfileInvalidation::Phone);
    }
    if !profile
        .date_of_birth
        .is_some_and(|date| is_valid_date_of_birth(date, today))
    {
        invalid.push(ProfileInvalidation::DateOfBirth);
    }
    if profile.address.trim().is_empty() {
        invalid.push(ProfileInvalidation::Address);
    }
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ProfileInvalidations(invalid))
    }
}

impl Validate for Profile {
    type Error = ProfileInvalidations;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_profile_at(self, OffsetDateTime::now_utc().date())
    }
}

impl AutoCorrect for Profile {
    fn auto_correct(mut self) -> Self {
        self.first_name = self.first_name.trim().to_owned();
        self.last_name = self.last_name.trim().to_owned();
        self.phone = self
            .phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '.' && *c != '-')
            .collect();
        self.address = self.address.trim().to_owned();
        self
    }
}
