use super::*;
use geoprofile_boundary as json;

#[get("/session")]
pub fn get_session(auth: Auth) -> Result<json::Session> {
    let identity = auth.identity()?.clone();
    Ok(Json(identity.into()))
}

#[get("/map/view")]
pub fn get_map_view(cfg: &State<Cfg>) -> Json<json::MapView> {
    let (lat, lng) = cfg.proximity.reference_point().to_lat_lng_deg();
    Json(json::MapView {
        lat,
        lng,
        zoom: cfg.map_zoom,
        max_distance_km: cfg.proximity.max_distance().to_km(),
    })
}

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
