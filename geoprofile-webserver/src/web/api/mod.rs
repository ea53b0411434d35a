use std::{fmt::Display, result, sync::Arc};

use geoprofile_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get, post, put,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, Cfg, Gateways};
use geoprofile_core::usecases;

mod addresses;
mod error;
mod profile;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   addresses   --- //
        addresses::get_suggestions,
        addresses::get_resolve,
        addresses::get_reverse,
        addresses::post_check,
        // ---   profile   --- //
        profile::get_profile,
        profile::put_profile,
        // ---   util   --- //
        util::get_session,
        util::get_map_view,
        util::get_version,
    ]
}

/// Runs blocking gateway and repository calls outside of the async executor.
async fn blocking<F, T>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(err.into()))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    json_error_response_with_fields(req, err, status, vec![])
}

fn json_error_response_with_fields<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
    fields: Vec<String>,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        fields,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
