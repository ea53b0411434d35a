use crate::email::EmailAddress;

/// The authenticated user of a session.
///
/// The identity is established by an external provider
/// and passed explicitly to all operations that need it.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email        : EmailAddress,
    pub display_name : Option<String>,
    pub avatar_url   : Option<String>,
}

impl Identity {
    pub const fn new(email: EmailAddress) -> Self {
        Self {
            email,
            display_name: None,
            avatar_url: None,
        }
    }

    /// Initial letter shown instead of a missing avatar.
    pub fn initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .unwrap_or('U')
    }
}
