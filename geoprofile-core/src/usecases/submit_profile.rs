use super::{check_address, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

pub fn submit_profile<R>(
    repo: &R,
    resolver: &AddressResolver,
    validator: &ProximityValidator,
    identity: &Identity,
    profile: Profile,
) -> Result<Profile>
where
    R: ProfileRepo + ?Sized,
{
    if !profile.email.is_same_mailbox(&identity.email) {
        return Err(Error::Forbidden);
    }
    let mut profile = profile.auto_correct();
    profile.email = identity.email.clone();
    profile.validate()?;
    match check_address(resolver, validator, &profile.address)? {
        ValidationOutcome::Accepted => {}
        ValidationOutcome::RejectedUnresolvable => {
            log::debug!("Rejected unresolvable address '{}'", profile.address);
            return Err(Error::AddressInvalid);
        }
        ValidationOutcome::RejectedTooFar(distance) => {
            log::debug!(
                "Rejected address '{}' that is {distance} away",
                profile.address
            );
            return Err(Error::AddressTooFar {
                distance,
                max_distance: validator.max_distance(),
            });
        }
    }
    repo.save_profile(&profile)?;
    log::info!("Updated profile of {}", profile.email);
    Ok(profile)
}
