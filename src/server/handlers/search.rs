use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{CategoryFilter, Coordinates, FeatureCollection};
use crate::error::{validation_error, Error};

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    longitude: Option<f64>,
    latitude: Option<f64>,
    radius: Option<f64>,
    #[serde(rename = "type")]
    filter: Option<String>,
}

impl NearbyParams {
    /// Presence checks happen here, before anything touches the store.
    fn validated(self) -> Result<(Coordinates, f64, CategoryFilter), Error> {
        let (longitude, latitude, radius) = match (self.longitude, self.latitude, self.radius) {
            (Some(longitude), Some(latitude), Some(radius)) => (longitude, latitude, radius),
            _ => {
                return Err(validation_error(
                    "longitude, latitude and radius are required",
                ))
            }
        };

        let filter = match self.filter {
            Some(raw) => raw.parse()?,
            None => CategoryFilter::Both,
        };

        Ok((Coordinates { longitude, latitude }, radius, filter))
    }
}

pub async fn nearby(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<FeatureCollection>, Error> {
    let (center, radius_meters, filter) = params.validated()?;

    let collection = api.search_nearby(center, radius_meters, filter).await?;

    Ok(collection.into())
}
