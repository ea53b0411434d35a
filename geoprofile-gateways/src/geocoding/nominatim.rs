use super::{build_client, fetch_text};
use anyhow::anyhow;
use geoprofile_core::gateways::geocode::{
    AddressSearchGateway, Error, ReverseGeocodingGateway, SearchQuery,
};
use geoprofile_entities::{address::AddressCandidate, geo::GeoPoint};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Geocoding with an OpenStreetMap Nominatim server.
///
/// The public server requires an identifying user agent.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    api_base_url: String,
}

impl Nominatim {
    pub fn try_new(
        api_base_url: String,
        timeout: Duration,
        user_agent: &str,
    ) -> anyhow::Result<Self> {
        let client = build_client(timeout, user_agent)?;
        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn reverse_request(&self, pos: GeoPoint) -> RequestBuilder {
        let url = format!("{}/reverse", self.api_base_url);
        let (lat, lon) = pos.to_lat_lng_deg();
        self.client.get(url).query(&[
            ("format", "json".to_string()),
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
        ])
    }

    fn search_request(&self, query: SearchQuery<'_>) -> RequestBuilder {
        let url = format!("{}/search", self.api_base_url);
        let limit = query.limit.to_string();
        self.client.get(url).query(&[
            ("format", "jsonv2"),
            ("q", query.text),
            ("limit", limit.as_str()),
        ])
    }
}

impl AddressSearchGateway for Nominatim {
    fn search(&self, query: SearchQuery<'_>) -> Result<Vec<AddressCandidate>, Error> {
        let body = fetch_text(self.search_request(query))?;
        parse_search_response(&body).map_err(Error::Payload)
    }
}

impl ReverseGeocodingGateway for Nominatim {
    fn reverse(&self, pos: GeoPoint) -> Result<Option<String>, Error> {
        let body = fetch_text(self.reverse_request(pos))?;
        parse_reverse_response(&body).map_err(|err| Error::Payload(err.into()))
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

// Nominatim encodes coordinates as strings
#[derive(Debug, Deserialize)]
struct Place {
    place_id: u64,
    lat: String,
    lon: String,
    display_name: String,
}

impl TryFrom<Place> for AddressCandidate {
    type Error = anyhow::Error;
    fn try_from(from: Place) -> anyhow::Result<Self> {
        let Place {
            place_id,
            lat,
            lon,
            display_name,
        } = from;
        let lat = lat
            .parse::<f64>()
            .map_err(|err| anyhow!("Invalid latitude '{lat}': {err}"))?;
        let lng = lon
            .parse::<f64>()
            .map_err(|err| anyhow!("Invalid longitude '{lon}': {err}"))?;
        Ok(Self {
            id: place_id.to_string(),
            label: display_name,
            pos: Some(GeoPoint::try_from_lat_lng_deg(lat, lng)?),
        })
    }
}

fn parse_search_response(body: &str) -> anyhow::Result<Vec<AddressCandidate>> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    places.into_iter().map(AddressCandidate::try_from).collect()
}

fn parse_reverse_response(body: &str) -> serde_json::Result<Option<String>> {
    let response: ReverseResponse = serde_json::from_str(body)?;
    if let Some(err) = response.error {
        log::debug!("Nominatim could not find an address: {err}");
    }
    Ok(response.display_name.filter(|name| !name.trim().is_empty()))
}
