use geoprofile_core::repositories::{Error as RepoError, ProfileRepo};
use geoprofile_entities::{email::EmailAddress, profile::*};
use jfs::Store;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

/// Stores each profile in a JSON file named after the owner's email address.
#[derive(Clone)]
pub struct JsonFileProfileStore {
    json_store: Store,
}

impl JsonFileProfileStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[rustfmt::skip]
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonProfile {
    first_name : String,
    last_name  : String,
    email      : String,
    phone      : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dob        : Option<String>,
    address    : String,
}

impl From<&Profile> for JsonProfile {
    fn from(from: &Profile) -> Self {
        Self {
            first_name: from.first_name.clone(),
            last_name: from.last_name.clone(),
            email: from.email.as_str().to_owned(),
            phone: from.phone.clone(),
            dob: from.date_of_birth.map(format_date_of_birth),
            address: from.address.clone(),
        }
    }
}

impl JsonProfile {
    fn into_profile(self, email: &EmailAddress) -> Profile {
        let Self {
            first_name,
            last_name,
            email: _,
            phone,
            dob,
            address,
        } = self;
        let date_of_birth = dob.and_then(|dob| {
            parse_date_of_birth(&dob)
                .map_err(|err| log::warn!("Invalid date of birth of {email}: {err}"))
                .ok()
        });
        Profile {
            email: email.clone(),
            first_name,
            last_name,
            phone,
            date_of_birth,
            address,
        }
    }
}

fn document_id(email: &EmailAddress) -> Result<&str, RepoError> {
    let id = email.as_str();
    if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
        return Err(RepoError::Other(anyhow::anyhow!(
            "Unsupported document id: {id}"
        )));
    }
    Ok(id)
}

impl ProfileRepo for JsonFileProfileStore {
    fn get_profile_by_email(&self, email: &EmailAddress) -> Result<Profile, RepoError> {
        let id = document_id(email)?;
        match self.json_store.get::<JsonProfile>(id) {
            Ok(json_profile) => Ok(json_profile.into_profile(email)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(RepoError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn save_profile(&self, profile: &Profile) -> Result<(), RepoError> {
        let id = document_id(&profile.email)?;
        self.json_store
            .save_with_id(&JsonProfile::from(profile), id)?;
        log::debug!("Saved profile {id} in {}", self.path().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoprofile_entities::builders::Builder;

    fn store() -> (tempfile::TempDir, JsonFileProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileProfileStore::try_new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn save_and_load_profile() {
        let (_dir, store) = store();
        let profile = Profile::build().email("jane@example.com").finish();
        store.save_profile(&profile).unwrap();
        let email = EmailAddress::new_unchecked("jane@example.com".into());
        assert_eq!(profile, store.get_profile_by_email(&email).unwrap());
    }

    #[test]
    fn replace_existing_profile() {
        let (_dir, store) = store();
        let profile = Profile::build().email("jane@example.com").finish();
        store.save_profile(&profile).unwrap();
        let updated = Profile::build()
            .email("jane@example.com")
            .phone("+33612345678")
            .date_of_birth(None)
            .finish();
        store.save_profile(&updated).unwrap();
        let email = EmailAddress::new_unchecked("jane@example.com".into());
        assert_eq!(updated, store.get_profile_by_email(&email).unwrap());
    }

    #[test]
    fn profile_not_found() {
        let (_dir, store) = store();
        let email = EmailAddress::new_unchecked("nobody@example.com".into());
        assert!(matches!(
            store.get_profile_by_email(&email),
            Err(RepoError::NotFound)
        ));
        assert!(store.try_get_profile_by_email(&email).unwrap().is_none());
    }

    #[test]
    fn reject_path_like_ids() {
        let (_dir, store) = store();
        let profile = Profile::build().email("../etc/passwd").finish();
        assert!(store.save_profile(&profile).is_err());
    }

    #[test]
    fn stored_document_uses_form_field_names() {
        let (dir, store) = store();
        let profile = Profile::build().email("jane@example.com").finish();
        store.save_profile(&profile).unwrap();
        let json =
            std::fs::read_to_string(dir.path().join("jane@example.com.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!("Jane", value["firstName"]);
        assert_eq!("1990-01-31", value["dob"]);
    }
}
