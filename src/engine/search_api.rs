use super::helpers::feature_with_distance;
use super::Engine;

use async_trait::async_trait;
use geo_types::Geometry;
use geozero::wkb;
use sqlx::Executor;

use crate::{
    api::SearchAPI,
    entities::{
        sort_by_distance, Category, CategoryFilter, Coordinates, Feature, FeatureCollection,
        SearchMetadata,
    },
    error::Error,
};

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_meters: f64,
        filter: CategoryFilter,
    ) -> Result<FeatureCollection, Error> {
        let mut features: Vec<Feature> = vec![];

        for category in filter.categories().iter().copied() {
            let found = self
                .nearby_in_category(category, center, radius_meters)
                .await?;

            tracing::info!(
                category = category.table(),
                count = found.len(),
                "nearby matches"
            );

            features.extend(found);
        }

        // the cross-category union is re-sorted; per-category order is
        // not preserved
        sort_by_distance(&mut features);

        let metadata = SearchMetadata {
            count: features.len(),
            search_center: center,
            radius_meters,
            search_type: filter,
        };

        Ok(FeatureCollection::with_metadata(features, metadata))
    }
}

impl Engine {
    async fn nearby_in_category(
        &self,
        category: Category,
        center: Coordinates,
        radius_meters: f64,
    ) -> Result<Vec<Feature>, Error> {
        // geography casts make ST_Distance/ST_DWithin geodesic rather
        // than planar
        let query = format!(
            "SELECT
                id, name, longitude, latitude,
                ST_AsGeoJSON(geom) AS geojson,
                ST_Distance(geom::geography, ST_SetSRID($1, 4326)::geography) AS distance
             FROM {}
             WHERE ST_DWithin(geom::geography, ST_SetSRID($1, 4326)::geography, $2)
             ORDER BY distance ASC",
            category.table()
        );

        let point: Geometry<f64> = center.into();

        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(
                sqlx::query(&query)
                    .bind(wkb::Encode(point))
                    .bind(radius_meters),
            )
            .await?;

        let mut features = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            features.push(feature_with_distance(row, category)?);
        }

        Ok(features)
    }
}
