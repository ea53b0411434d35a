use super::{json_error_response, json_error_response_with_fields};
use anyhow::anyhow;
use geoprofile_core::{
    entities::{EmailAddressParseError, GeoPointError},
    repositories::Error as RepoError,
    resolver::ResolutionFailure,
    usecases::Error as UsecaseError,
};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid identity")]
    Unauthorized,
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<ResolutionFailure> for Error {
    fn from(err: ResolutionFailure) -> Self {
        match err {
            ResolutionFailure::NoMatch => Self::OtherWithStatus(anyhow!(err), Status::NotFound),
            ResolutionFailure::ProviderError(err) => UsecaseError::GeocodingUnavailable(err).into(),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        UsecaseError::from(err).into()
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(err: EmailAddressParseError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

impl From<GeoPointError> for Error {
    fn from(err: GeoPointError) -> Self {
        Self::OtherWithStatus(err.into(), Status::BadRequest)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Unauthorized => json_error_response(req, &self, Status::Unauthorized),
            Error::Usecase(err) => match err {
                UsecaseError::Forbidden => json_error_response(req, &err, Status::Forbidden),
                UsecaseError::Profile(ref invalidations) => {
                    let fields = invalidations
                        .0
                        .iter()
                        .map(|invalidation| invalidation.field_name().to_owned())
                        .collect();
                    json_error_response_with_fields(req, &err, Status::BadRequest, fields)
                }
                UsecaseError::AddressInvalid | UsecaseError::AddressTooFar { .. } => {
                    json_error_response_with_fields(
                        req,
                        &err,
                        Status::UnprocessableEntity,
                        vec!["address".to_owned()],
                    )
                }
                UsecaseError::GeocodingUnavailable(ref cause) => {
                    warn!("{err}: {cause}");
                    json_error_response(req, &err, Status::ServiceUnavailable)
                }
                UsecaseError::Repo(RepoError::NotFound) => {
                    json_error_response(req, &err, Status::NotFound)
                }
                UsecaseError::Repo(_) => {
                    error!("Error: {err}");
                    json_error_response(req, &err, Status::InternalServerError)
                }
            },
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
