use crate::email::EmailAddress;
use time::{macros::format_description, Date};

/// The personal data of a user.
///
/// Profiles are identified by the email address
/// of their owner which never changes.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub email         : EmailAddress,
    pub first_name    : String,
    pub last_name     : String,
    pub phone         : String,
    pub date_of_birth : Option<Date>,
    pub address       : String,
}

impl Profile {
    /// An empty profile for a user that did not fill in the form yet.
    pub fn empty(email: EmailAddress) -> Self {
        Self {
            email,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            date_of_birth: None,
            address: String::new(),
        }
    }
}

pub fn parse_date_of_birth(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
}

pub fn format_date_of_birth(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
