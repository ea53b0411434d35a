pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::profile_builder::*;

pub mod profile_builder {

    use super::*;
    use crate::{email::EmailAddress, profile::*};
    use time::Date;

    #[derive(Debug)]
    pub struct ProfileBuild {
        profile: Profile,
    }

    impl ProfileBuild {
        pub fn email(mut self, email: &str) -> Self {
            self.profile.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn first_name(mut self, name: &str) -> Self {
            self.profile.first_name = name.into();
            self
        }
        pub fn last_name(mut self, name: &str) -> Self {
            self.profile.last_name = name.into();
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.profile.phone = phone.into();
            self
        }
        pub fn date_of_birth(mut self, date: Option<Date>) -> Self {
            self.profile.date_of_birth = date;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.profile.address = address.into();
            self
        }
        pub fn finish(self) -> Profile {
            self.profile
        }
    }

    impl Builder for Profile {
        type Build = ProfileBuild;
        fn build() -> Self::Build {
            ProfileBuild {
                profile: Profile {
                    email: EmailAddress::new_unchecked("jane.doe@example.com".into()),
                    first_name: "Jane".into(),
                    last_name: "Doe".into(),
                    phone: "0612345678".into(),
                    date_of_birth: Date::from_calendar_date(1990, time::Month::January, 31).ok(),
                    address: "20 Avenue de Ségur 75007 Paris".into(),
                },
            }
        }
    }
}
