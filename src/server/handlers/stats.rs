use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Stats;
use crate::error::Error;

pub async fn show(Extension(api): Extension<DynAPI>) -> Result<Json<Stats>, Error> {
    let stats = api.stats().await?;

    Ok(stats.into())
}
