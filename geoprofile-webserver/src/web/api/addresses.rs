use super::*;
use geoprofile_boundary as json;
use geoprofile_core::{entities::GeoPoint, proximity::ValidationOutcome};

fn validation_outcome_to_json(outcome: ValidationOutcome) -> json::ValidationOutcome {
    match outcome {
        ValidationOutcome::Accepted => json::ValidationOutcome::Accepted,
        ValidationOutcome::RejectedTooFar(distance) => json::ValidationOutcome::RejectedTooFar {
            distance_km: distance.to_km(),
        },
        ValidationOutcome::RejectedUnresolvable => json::ValidationOutcome::RejectedUnresolvable,
    }
}

#[get("/addresses/suggestions?<q>")]
pub async fn get_suggestions(
    auth: Auth,
    gateways: &State<Gateways>,
    sequences: &State<SuggestionSequences>,
    q: String,
) -> Result<json::AddressSuggestions> {
    let sequence = sequences.of(&auth.identity()?.email);
    let generation = sequence.next();
    let gateways = gateways.inner().clone();
    let candidates = blocking(move || gateways.resolver().suggest(&q)).await?;
    let (stale, suggestions) = match sequence.settle(generation, candidates) {
        Some(candidates) => (false, candidates.into_iter().map(Into::into).collect()),
        None => (true, vec![]),
    };
    Ok(Json(json::AddressSuggestions {
        generation: generation.to_raw(),
        stale,
        suggestions,
    }))
}

#[get("/addresses/resolve?<label>")]
pub async fn get_resolve(
    auth: Auth,
    gateways: &State<Gateways>,
    label: String,
) -> Result<json::Coordinate> {
    auth.identity()?;
    let gateways = gateways.inner().clone();
    let pos = blocking(move || gateways.resolver().resolve(&label)).await??;
    Ok(Json(pos.into()))
}

#[get("/addresses/reverse?<lat>&<lng>")]
pub async fn get_reverse(
    auth: Auth,
    gateways: &State<Gateways>,
    lat: f64,
    lng: f64,
) -> Result<json::ReverseGeocoding> {
    auth.identity()?;
    let pos = GeoPoint::try_from_lat_lng_deg(lat, lng)?;
    let gateways = gateways.inner().clone();
    let label = blocking(move || gateways.resolver().reverse_resolve(pos)).await?;
    Ok(Json(json::ReverseGeocoding { label }))
}

#[post("/addresses/check", format = "application/json", data = "<check>")]
pub async fn post_check(
    auth: Auth,
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    check: JsonResult<'_, json::AddressCheck>,
) -> Result<json::ValidationOutcome> {
    auth.identity()?;
    let json::AddressCheck { address } = check?.into_inner();
    let gateways = gateways.inner().clone();
    let validator = cfg.proximity;
    let outcome = blocking(move || {
        usecases::check_address(&gateways.resolver(), &validator, &address)
    })
    .await??;
    Ok(Json(validation_outcome_to_json(outcome)))
}
