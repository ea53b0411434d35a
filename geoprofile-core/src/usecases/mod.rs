mod check_address;
mod error;
mod load_profile;
mod submit_profile;

#[cfg(test)]
pub mod tests;

pub use self::{check_address::*, error::Error, load_profile::*, submit_profile::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        proximity::{ProximityValidator, ValidationOutcome},
        repositories::*,
        resolver::{AddressResolver, ResolutionFailure},
    };
}
