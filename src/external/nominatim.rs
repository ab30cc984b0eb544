use serde::Deserialize;
use std::env;

use crate::error::{upstream_error, Error};

#[derive(Clone, Debug, Deserialize)]
struct SearchHit {
    // nominatim serializes coordinates as strings
    lon: String,
    lat: String,
    display_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeocodedPlace {
    pub longitude: f64,
    pub latitude: f64,
    pub display_name: String,
}

impl TryFrom<SearchHit> for GeocodedPlace {
    type Error = Error;

    fn try_from(hit: SearchHit) -> Result<Self, Error> {
        let longitude = hit.lon.parse().map_err(|_| upstream_error())?;
        let latitude = hit.lat.parse().map_err(|_| upstream_error())?;

        Ok(Self {
            longitude,
            latitude,
            display_name: hit.display_name,
        })
    }
}

/// Best-effort address lookup; only the first hit is used.
#[tracing::instrument]
pub async fn geocode(address: &str) -> Result<Option<GeocodedPlace>, Error> {
    let api_base =
        env::var("NOMINATIM_API_BASE").unwrap_or_else(|_| "nominatim.openstreetmap.org".into());
    let url = format!("https://{}/search", api_base);

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("format", "json")])
        .query(&[("q", address)])
        .header(reqwest::header::USER_AGENT, "gastromap/0.1")
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(upstream_error());
    }

    let hits: Vec<SearchHit> = res.json().await?;

    match hits.into_iter().next() {
        Some(hit) => Ok(Some(hit.try_into()?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hits_decode_and_convert() {
        let body = r#"[
            {"lon": "2.1682919", "lat": "41.3865289", "display_name": "Barcelona, Spain"},
            {"lon": "0.0", "lat": "0.0", "display_name": "elsewhere"}
        ]"#;

        let hits: Vec<SearchHit> = serde_json::from_str(body).unwrap();
        let place: GeocodedPlace = hits.into_iter().next().unwrap().try_into().unwrap();

        assert_eq!(place.longitude, 2.1682919);
        assert_eq!(place.latitude, 41.3865289);
        assert_eq!(place.display_name, "Barcelona, Spain");
    }

    #[test]
    fn malformed_coordinates_are_an_upstream_error() {
        let hit = SearchHit {
            lon: "not-a-number".into(),
            lat: "41.38".into(),
            display_name: "broken".into(),
        };

        assert!(GeocodedPlace::try_from(hit).is_err());
    }
}
