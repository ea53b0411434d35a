use geoprofile_core::gateways::geocode::Error;
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

pub mod ban;
pub mod nominatim;

pub const DEFAULT_USER_AGENT: &str = concat!("geoprofile/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(timeout: Duration, user_agent: &str) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}

// Timeouts and connection errors are reported as transport errors.
pub(crate) fn fetch_text(request: RequestBuilder) -> Result<String, Error> {
    let response = request
        .send()
        .map_err(|err| Error::Transport(err.into()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(status.as_u16()));
    }
    log::debug!("Geocoding provider response: {:#?}", response);
    response.text().map_err(|err| Error::Transport(err.into()))
}
