#[macro_use]
extern crate log;

use geoprofile_core::repositories::ProfileRepo;
use std::sync::Arc;

mod web;

pub use web::{Cfg, Gateways, DEFAULT_MAP_ZOOM};

pub async fn run(
    profiles: Arc<dyn ProfileRepo + Send + Sync>,
    gateways: Gateways,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(profiles, gateways, enable_cors, cfg, version).await;
}
