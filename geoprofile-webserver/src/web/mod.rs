use std::sync::Arc;

use geoprofile_core::{
    gateways::{
        geocode::{AddressSearchGateway, ReverseGeocodingGateway},
        monitor::GeocodingMonitor,
    },
    proximity::ProximityValidator,
    repositories::ProfileRepo,
    resolver::AddressResolver,
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub proximity: ProximityValidator,
    /// Initial zoom level of the location picker
    pub map_zoom: u8,
}

pub const DEFAULT_MAP_ZOOM: u8 = 13;

impl Default for Cfg {
    fn default() -> Self {
        Self {
            proximity: ProximityValidator::default(),
            map_zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// The geocoding providers shared by all requests.
#[derive(Clone)]
pub struct Gateways {
    pub search: Arc<dyn AddressSearchGateway + Send + Sync>,
    pub reverse: Arc<dyn ReverseGeocodingGateway + Send + Sync>,
    pub monitor: Arc<dyn GeocodingMonitor + Send + Sync>,
}

impl Gateways {
    pub fn resolver(&self) -> AddressResolver<'_> {
        AddressResolver::new(&*self.search, &*self.reverse, &*self.monitor)
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    profiles: Arc<dyn ProfileRepo + Send + Sync>,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!(
        "Accepting addresses within {} around {}",
        cfg.proximity.max_distance(),
        cfg.proximity.reference_point()
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::Profiles(profiles))
        .manage(gateways)
        .manage(guards::SuggestionSequences::default())
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    profiles: Arc<dyn ProfileRepo + Send + Sync>,
    gateways: Gateways,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };

    let instance = rocket_instance(options, profiles, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
