use anyhow::{anyhow, Result};
use geoprofile_core::{
    entities::{Distance, GeoPoint},
    proximity::ProximityValidator,
};
use geoprofile_gateways::geocoding::{ban, nominatim, DEFAULT_USER_AGENT};
use geoprofile_webserver::DEFAULT_MAP_ZOOM;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoprofile.toml";

const ENV_NAME_PROFILE_DIR: &str = "PROFILE_DIR";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// Highest zoom level of OpenStreetMap tiles
const MAX_MAP_ZOOM: u8 = 19;

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub proximity: Proximity,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(profile_dir) = env::var(ENV_NAME_PROFILE_DIR) {
            cfg.db.profile_dir = profile_dir.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// File system directory with one JSON file per profile.
    pub profile_dir: PathBuf,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub search: SearchGateway,
    pub reverse: ReverseGeocodingGateway,
    pub request_timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchGateway {
    Ban { api_base_url: String },
    Nominatim { api_base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReverseGeocodingGateway {
    Nominatim { api_base_url: String },
}

pub struct Proximity {
    pub validator: ProximityValidator,
    pub map_zoom: u8,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            proximity,
            gateway,
        } = from;

        let raw::Db { profile_dir } = db.unwrap_or_default();
        let db = Db { profile_dir };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Geocoding {
            search,
            reverse,
            request_timeout,
            user_agent,
        } = geocoding.unwrap_or_default();
        let raw::Gateway { ban, nominatim } = gateway.unwrap_or_default();
        let ban_api_base_url = ban
            .and_then(|gw| gw.api_base_url)
            .unwrap_or_else(|| ban::DEFAULT_API_BASE_URL.to_owned());
        let nominatim_api_base_url = nominatim
            .and_then(|gw| gw.api_base_url)
            .unwrap_or_else(|| nominatim::DEFAULT_API_BASE_URL.to_owned());

        let search = match search.unwrap_or(raw::SearchGateway::Ban) {
            raw::SearchGateway::Ban => SearchGateway::Ban {
                api_base_url: ban_api_base_url,
            },
            raw::SearchGateway::Nominatim => SearchGateway::Nominatim {
                api_base_url: nominatim_api_base_url.clone(),
            },
        };
        let reverse = match reverse.unwrap_or(raw::ReverseGeocodingGateway::Nominatim) {
            raw::ReverseGeocodingGateway::Nominatim => ReverseGeocodingGateway::Nominatim {
                api_base_url: nominatim_api_base_url,
            },
        };
        let request_timeout = request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(anyhow!("Invalid geocoding request timeout"));
        }
        let geocoding = Geocoding {
            search,
            reverse,
            request_timeout,
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        };

        let raw::Proximity {
            reference_lat,
            reference_lng,
            max_distance_km,
            map_zoom,
        } = proximity.unwrap_or_default();
        let reference_point = GeoPoint::try_from_lat_lng_deg(reference_lat, reference_lng)
            .map_err(|err| anyhow!("Invalid reference point: {err}"))?;
        let max_distance = Distance::from_km(max_distance_km);
        if !max_distance.is_valid() || max_distance_km <= 0.0 {
            return Err(anyhow!("Invalid max. distance: {max_distance_km} km"));
        }
        let map_zoom = map_zoom.unwrap_or(DEFAULT_MAP_ZOOM);
        if map_zoom > MAX_MAP_ZOOM {
            return Err(anyhow!("Invalid map zoom level: {map_zoom}"));
        }
        let proximity = Proximity {
            validator: ProximityValidator::new(reference_point, max_distance),
            map_zoom,
        };

        Ok(Self {
            db,
            webserver,
            geocoding,
            proximity,
        })
    }
}
