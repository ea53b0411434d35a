use crate::config::{Geocoding, ReverseGeocodingGateway, SearchGateway};
use anyhow::Result;
use geoprofile_core::gateways::geocode::AddressSearchGateway;
use geoprofile_gateways::{
    geocoding::{ban::Ban, nominatim::Nominatim},
    monitor::LogMonitor,
};
use geoprofile_webserver::Gateways;
use std::sync::Arc;

pub fn geocoding_gateways(cfg: &Geocoding) -> Result<Gateways> {
    let Geocoding {
        search,
        reverse,
        request_timeout,
        user_agent,
    } = cfg;
    let search: Arc<dyn AddressSearchGateway + Send + Sync> = match search {
        SearchGateway::Ban { api_base_url } => {
            log::info!("Use BAN address search ({api_base_url})");
            Arc::new(Ban::try_new(
                api_base_url.clone(),
                *request_timeout,
                user_agent,
            )?)
        }
        SearchGateway::Nominatim { api_base_url } => {
            log::info!("Use Nominatim address search ({api_base_url})");
            Arc::new(Nominatim::try_new(
                api_base_url.clone(),
                *request_timeout,
                user_agent,
            )?)
        }
    };
    let reverse = match reverse {
        ReverseGeocodingGateway::Nominatim { api_base_url } => {
            log::info!("Use Nominatim reverse geocoding ({api_base_url})");
            Arc::new(Nominatim::try_new(
                api_base_url.clone(),
                *request_timeout,
                user_agent,
            )?)
        }
    };
    Ok(Gateways {
        search,
        reverse,
        monitor: Arc::new(LogMonitor),
    })
}
