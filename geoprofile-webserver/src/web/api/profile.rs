use super::*;
use geoprofile_boundary as json;
use geoprofile_core::entities::Profile;

#[get("/profile")]
pub async fn get_profile(auth: Auth, profiles: &State<Profiles>) -> Result<json::Profile> {
    let identity = auth.identity()?.clone();
    let repo = Arc::clone(&profiles.0);
    let profile = blocking(move || usecases::load_profile(&*repo, &identity)).await??;
    Ok(Json(profile.into()))
}

#[put("/profile", format = "application/json", data = "<profile>")]
pub async fn put_profile(
    auth: Auth,
    profiles: &State<Profiles>,
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    profile: JsonResult<'_, json::Profile>,
) -> Result<json::Profile> {
    let identity = auth.identity()?.clone();
    let profile = Profile::try_from(profile?.into_inner())?;
    let repo = Arc::clone(&profiles.0);
    let gateways = gateways.inner().clone();
    let validator = cfg.proximity;
    let saved = blocking(move || {
        usecases::submit_profile(
            &*repo,
            &gateways.resolver(),
            &validator,
            &identity,
            profile,
        )
    })
    .await??;
    Ok(Json(saved.into()))
}
