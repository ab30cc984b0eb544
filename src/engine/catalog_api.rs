use super::helpers::feature_from_row;
use super::Engine;

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use sqlx::{Executor, Row};

use crate::{
    api::CatalogAPI,
    entities::{Category, Coordinates, Deleted, Feature, FeatureCollection},
    error::{not_found_error, Error},
};

#[async_trait]
impl CatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_establishments(&self, category: Category) -> Result<FeatureCollection, Error> {
        let query = format!(
            "SELECT id, name, longitude, latitude, ST_AsGeoJSON(geom) AS geojson
             FROM {} ORDER BY name ASC",
            category.table()
        );

        let mut conn = self.pool.acquire().await?;

        let mut features = vec![];
        {
            let mut rows = conn.fetch(sqlx::query(&query));
            while let Some(row) = rows.try_next().await? {
                features.push(feature_from_row(&row, category)?);
            }
        }

        tracing::info!(
            category = category.table(),
            count = features.len(),
            "establishments listed"
        );

        Ok(FeatureCollection::new(features))
    }

    #[tracing::instrument(skip(self))]
    async fn create_establishment(
        &self,
        category: Category,
        name: String,
        coordinates: Coordinates,
    ) -> Result<Feature, Error> {
        let query = format!(
            "INSERT INTO {} (name, longitude, latitude, geom, created_at)
             VALUES ($1, $2, $3, ST_SetSRID(ST_MakePoint($2, $3), 4326), $4)
             RETURNING id, name, longitude, latitude, ST_AsGeoJSON(geom) AS geojson",
            category.table()
        );

        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query(&query)
                    .bind(&name)
                    .bind(coordinates.longitude)
                    .bind(coordinates.latitude)
                    .bind(Utc::now()),
            )
            .await?;

        let feature = feature_from_row(&row, category)?;

        tracing::info!(
            category = category.table(),
            id = feature.id,
            name = %feature.properties.name,
            "establishment created"
        );

        Ok(feature)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_establishment(
        &self,
        category: Category,
        name: String,
    ) -> Result<Deleted, Error> {
        // name collisions resolve to the lowest id, so "first match" does
        // not depend on scan order
        let query = format!(
            "DELETE FROM {table}
             WHERE id = (SELECT min(id) FROM {table} WHERE name = $1)
             RETURNING id, name",
            table = category.table()
        );

        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_optional(sqlx::query(&query).bind(&name))
            .await?
            .ok_or_else(|| not_found_error("establishment not found"))?;

        let id: i32 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        tracing::info!(category = category.table(), id, name = %name, "establishment deleted");

        Ok(Deleted::new(id, name))
    }
}
