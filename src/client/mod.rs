mod layers;

pub use layers::{ClickAction, LayerSet};

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::entities::{
    Category, CategoryFilter, Coordinates, Deleted, Feature, FeatureCollection, Stats,
};
use crate::error::{not_found_error, upstream_error, validation_error, Error};
use crate::external::nominatim;

/// Typed client for the establishment service. One request per call,
/// no retries; failures surface directly to the caller.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, category: Category) -> Result<FeatureCollection, Error> {
        let url = format!("{}/{}", self.base_url, category.table());

        let res = self.http.get(url).send().await?;

        decode(res).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn nearby(
        &self,
        center: Coordinates,
        radius_meters: f64,
        filter: CategoryFilter,
    ) -> Result<FeatureCollection, Error> {
        let url = format!("{}/nearby", self.base_url);

        let res = self
            .http
            .get(url)
            .query(&[
                ("longitude", center.longitude),
                ("latitude", center.latitude),
                ("radius", radius_meters),
            ])
            .query(&[("type", filter.name())])
            .send()
            .await?;

        decode(res).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(
        &self,
        category: Category,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<Feature, Error> {
        let url = format!("{}/{}", self.base_url, category.table());

        let res = self
            .http
            .post(url)
            .json(&json!({
                "name": name,
                "longitude": coordinates.longitude,
                "latitude": coordinates.latitude,
            }))
            .send()
            .await?;

        decode(res).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, category: Category, name: &str) -> Result<Deleted, Error> {
        // the name segment may hold spaces or slashes; let the url
        // builder percent-encode it
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| validation_error("invalid base url"))?;
        url.path_segments_mut()
            .map_err(|_| validation_error("invalid base url"))?
            .push(category.table())
            .push(name);

        let res = self.http.delete(url).send().await?;

        decode(res).await
    }

    /// Re-run the proximity search from the layer set's reference
    /// point, e.g. after the radius or filter changed. The response is
    /// applied unless a newer request was issued meanwhile; returns
    /// whether the layers changed.
    pub async fn refresh_nearby(
        &self,
        layers: &mut LayerSet,
        radius_meters: f64,
        filter: CategoryFilter,
    ) -> Result<bool, Error> {
        let center = match layers.user_location() {
            Some(center) => center,
            None => return Err(validation_error("no user location set")),
        };

        let seq = layers.begin_request();
        let collection = self.nearby(center, radius_meters, filter).await?;

        Ok(layers.apply(seq, filter, collection))
    }

    #[tracing::instrument(skip(self))]
    pub async fn stats(&self) -> Result<Stats, Error> {
        let url = format!("{}/stats", self.base_url);

        let res = self.http.get(url).send().await?;

        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();

    if status.as_u16() == 404 {
        return Err(not_found_error("establishment not found"));
    } else if status.is_client_error() {
        return Err(validation_error("request rejected"));
    } else if !status.is_success() {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}

/// Geocode an address (best effort, first hit) and make it the layer
/// set's reference point for follow-up proximity queries.
pub async fn locate_address(
    layers: &mut LayerSet,
    address: &str,
) -> Result<Option<Coordinates>, Error> {
    let place = match nominatim::geocode(address).await? {
        Some(place) => place,
        None => return Ok(None),
    };

    let coordinates = Coordinates {
        longitude: place.longitude,
        latitude: place.latitude,
    };
    layers.set_user_location(coordinates);

    Ok(Some(coordinates))
}
