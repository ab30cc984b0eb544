use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{
    Category, CategoryFilter, Coordinates, Deleted, Feature, FeatureCollection, Stats,
};
use crate::error::Error;

#[async_trait]
pub trait CatalogAPI {
    async fn list_establishments(&self, category: Category) -> Result<FeatureCollection, Error>;

    async fn create_establishment(
        &self,
        category: Category,
        name: String,
        coordinates: Coordinates,
    ) -> Result<Feature, Error>;

    async fn delete_establishment(&self, category: Category, name: String)
        -> Result<Deleted, Error>;
}

#[async_trait]
pub trait SearchAPI {
    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_meters: f64,
        filter: CategoryFilter,
    ) -> Result<FeatureCollection, Error>;
}

#[async_trait]
pub trait StatsAPI {
    async fn stats(&self) -> Result<Stats, Error>;
}

pub trait API: CatalogAPI + SearchAPI + StatsAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
