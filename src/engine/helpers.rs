use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::entities::{Category, Feature, PointGeometry};
use crate::error::{database_error, Error};

pub(super) fn feature_from_row(row: &PgRow, category: Category) -> Result<Feature, Error> {
    let id: i32 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let longitude: f64 = row.try_get("longitude")?;
    let latitude: f64 = row.try_get("latitude")?;

    // the store is the sole authority for geometry serialization
    let geojson: String = row.try_get("geojson")?;
    let geometry: PointGeometry = serde_json::from_str(&geojson).map_err(database_error)?;

    Ok(Feature::new(id, geometry, name, longitude, latitude, category))
}

pub(super) fn feature_with_distance(row: &PgRow, category: Category) -> Result<Feature, Error> {
    let mut feature = feature_from_row(row, category)?;

    let distance: f64 = row.try_get("distance")?;
    feature.properties.distance = Some(distance.round() as i64);

    Ok(feature)
}
