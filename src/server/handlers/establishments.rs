use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{Category, Coordinates, Deleted, Feature, FeatureCollection};
use crate::error::{validation_error, Error};

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    name: Option<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
}

impl CreateParams {
    fn validated(self) -> Result<(String, Coordinates), Error> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(validation_error("name, longitude and latitude are required")),
        };

        let (longitude, latitude) = match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => (longitude, latitude),
            _ => return Err(validation_error("name, longitude and latitude are required")),
        };

        Ok((name, Coordinates { longitude, latitude }))
    }
}

pub async fn list_hotels(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<FeatureCollection>, Error> {
    let collection = api.list_establishments(Category::Hotel).await?;

    Ok(collection.into())
}

pub async fn list_restaurants(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<FeatureCollection>, Error> {
    let collection = api.list_establishments(Category::Restaurant).await?;

    Ok(collection.into())
}

pub async fn create_hotel(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Feature>), Error> {
    create(api, Category::Hotel, params).await
}

pub async fn create_restaurant(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Feature>), Error> {
    create(api, Category::Restaurant, params).await
}

async fn create(
    api: DynAPI,
    category: Category,
    params: CreateParams,
) -> Result<(StatusCode, Json<Feature>), Error> {
    let (name, coordinates) = params.validated()?;

    let feature = api.create_establishment(category, name, coordinates).await?;

    Ok((StatusCode::CREATED, feature.into()))
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path((category, name)): Path<(String, String)>,
) -> Result<Json<Deleted>, Error> {
    let category: Category = category.parse()?;

    let deleted = api.delete_establishment(category, name).await?;

    Ok(deleted.into())
}
