use crate::{
    entities::Distance, gateways::geocode, repositories, util::validate::ProfileInvalidations,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Profile(#[from] ProfileInvalidations),
    #[error("The address is invalid")]
    AddressInvalid,
    #[error("The address is {distance} away (max. {max_distance})")]
    AddressTooFar {
        distance: Distance,
        max_distance: Distance,
    },
    #[error("The geocoding service is temporarily unavailable")]
    GeocodingUnavailable(#[source] geocode::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
