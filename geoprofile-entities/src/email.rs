use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
}

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self { address }
    }
    pub fn into_string(self) -> String {
        self.address
    }
    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }
    /// Both addresses denote the same mailbox, regardless of letter case.
    pub fn is_same_mailbox(&self, other: &Self) -> bool {
        self.address.to_lowercase() == other.address.to_lowercase()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        Ok(Self {
            address: info.addr.to_lowercase(),
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_address() {
        let email: EmailAddress = "jane.doe@example.com".parse().unwrap();
        assert_eq!("jane.doe@example.com", email.as_str());
    }

    #[test]
    fn parse_address_with_display_name() {
        let email: EmailAddress = r#""Jane Doe" <jane.doe@example.com>"#.parse().unwrap();
        assert_eq!("jane.doe@example.com", email.as_str());
        assert_eq!("jane.doe@example.com", email.to_string());
    }

    #[test]
    fn normalize_letter_case() {
        let email: EmailAddress = "Jane.Doe@Example.COM".parse().unwrap();
        assert_eq!("jane.doe@example.com", email.as_str());
    }

    #[test]
    fn same_mailbox_ignores_letter_case() {
        let jane = EmailAddress::new_unchecked("Jane@Example.com".into());
        assert!(jane.is_same_mailbox(&EmailAddress::new_unchecked("jane@example.com".into())));
        assert!(!jane.is_same_mailbox(&EmailAddress::new_unchecked("john@example.com".into())));
    }

    #[test]
    fn reject_invalid_address() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("a@b.c, d@e.f".parse::<EmailAddress>().is_err());
    }
}
