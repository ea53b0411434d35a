use super::prelude::*;

/// The stored profile or an empty one if the user did not submit any yet.
pub fn load_profile<R>(repo: &R, identity: &Identity) -> Result<Profile>
where
    R: ProfileRepo + ?Sized,
{
    let profile = repo
        .try_get_profile_by_email(&identity.email)?
        .unwrap_or_else(|| Profile::empty(identity.email.clone()));
    Ok(profile)
}
