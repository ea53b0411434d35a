use super::{build_client, fetch_text};
use anyhow::anyhow;
use geoprofile_core::gateways::geocode::{AddressSearchGateway, Error, SearchQuery};
use geoprofile_entities::{address::AddressCandidate, geo::GeoPoint};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api-adresse.data.gouv.fr";

// Queries outside these bounds are answered with "400 Bad Request"
const MIN_QUERY_LEN: usize = 3;
const MAX_QUERY_LEN: usize = 200;

/// Address search based on the French "Base Adresse Nationale".
#[derive(Debug, Clone)]
pub struct Ban {
    client: Client,
    api_base_url: String,
}

impl Ban {
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

    fn search_request(&self, query: SearchQuery<'_>) -> RequestBuilder {
        let url = format!("{}/search/", self.api_base_url);
        let limit = query.limit.to_string();
        self.client
            .get(url)
            .query(&[("q", query.text), ("limit", limit.as_str())])
    }
}

impl AddressSearchGateway for Ban {
    fn search(&self, query: SearchQuery<'_>) -> Result<Vec<AddressCandidate>, Error> {
        if !is_searchable(query.text) {
            log::debug!("Skipping BAN search for unsupported query '{}'", query.text);
            return Ok(vec![]);
        }
        let body = fetch_text(self.search_request(query))?;
        parse_search_response(&body).map_err(Error::Payload)
    }
}

/// The query must start with a letter or digit and have between
/// 3 and 200 characters.
fn is_searchable(text: &str) -> bool {
    let text = text.trim();
    let len = text.chars().count();
    (MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&len)
        && text.chars().next().is_some_and(char::is_alphanumeric)
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON order: `[lon, lat]`
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    id: String,
    label: String,
}

impl TryFrom<Feature> for AddressCandidate {
    type Error = anyhow::Error;
    fn try_from(from: Feature) -> anyhow::Result<Self> {
        let Feature {
            geometry,
            properties: Properties { id, label },
        } = from;
        let pos = match geometry.as_ref().map(|g| g.coordinates.as_slice()) {
            Some([lng, lat, ..]) => Some(GeoPoint::try_from_lat_lng_deg(*lat, *lng)?),
            Some(_) => return Err(anyhow!("Incomplete coordinates of '{label}'")),
            None => None,
        };
        Ok(Self { id, label, pos })
    }
}

fn parse_search_response(body: &str) -> anyhow::Result<Vec<AddressCandidate>> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    collection
        .features
        .into_iter()
        .map(AddressCandidate::try_from)
        .collect()
}
