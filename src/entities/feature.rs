use serde::{Deserialize, Serialize};

use super::{Category, CategoryFilter, Coordinates};

/// GeoJSON point geometry, coordinates in longitude/latitude order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

/// One establishment as it appears on the wire. The id is the durable
/// row id, not a per-query position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i32,
    pub geometry: PointGeometry,
    pub properties: Properties,
}

impl Feature {
    pub fn new(
        id: i32,
        geometry: PointGeometry,
        name: String,
        longitude: f64,
        latitude: f64,
        category: Category,
    ) -> Self {
        Self {
            kind: "Feature".into(),
            id,
            geometry,
            properties: Properties {
                name,
                longitude,
                latitude,
                category,
                distance: None,
            },
        }
    }
}

/// Descriptive metadata attached to proximity-search responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    pub count: usize,
    pub search_center: Coordinates,
    pub radius_meters: f64,
    pub search_type: CategoryFilter,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SearchMetadata>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".into(),
            features,
            metadata: None,
        }
    }

    pub fn with_metadata(features: Vec<Feature>, metadata: SearchMetadata) -> Self {
        Self {
            kind: "FeatureCollection".into(),
            features,
            metadata: Some(metadata),
        }
    }
}

/// Ascending by computed distance; the sort is stable, so features
/// without a distance keep their relative order at the tail.
pub fn sort_by_distance(features: &mut [Feature]) {
    features.sort_by_key(|feature| feature.properties.distance.unwrap_or(i64::MAX));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(id: i32, name: &str, distance: Option<i64>) -> Feature {
        let mut feature = Feature::new(
            id,
            PointGeometry {
                kind: "Point".into(),
                coordinates: [2.17, 41.38],
            },
            name.into(),
            2.17,
            41.38,
            Category::Hotel,
        );
        feature.properties.distance = distance;
        feature
    }

    #[test]
    fn feature_serializes_to_geojson_shape() {
        let value = serde_json::to_value(feature(7, "Hotel X", None)).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["id"], 7);
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"], json!([2.17, 41.38]));
        assert_eq!(value["properties"]["name"], "Hotel X");
        assert_eq!(value["properties"]["category"], "hotel");
        assert!(value["properties"].get("distance").is_none());
    }

    #[test]
    fn search_features_carry_distance() {
        let value = serde_json::to_value(feature(1, "Hotel X", Some(153))).unwrap();
        assert_eq!(value["properties"]["distance"], 153);
    }

    #[test]
    fn collection_metadata_uses_wire_names() {
        let metadata = SearchMetadata {
            count: 1,
            search_center: Coordinates {
                longitude: 2.1682919,
                latitude: 41.3865289,
            },
            radius_meters: 2000.0,
            search_type: CategoryFilter::Hotels,
        };

        let value =
            serde_json::to_value(FeatureCollection::with_metadata(vec![], metadata)).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["metadata"]["count"], 1);
        assert_eq!(value["metadata"]["searchCenter"]["longitude"], 2.1682919);
        assert_eq!(value["metadata"]["radiusMeters"], 2000.0);
        assert_eq!(value["metadata"]["searchType"], "hotels");
    }

    #[test]
    fn plain_collections_omit_metadata() {
        let value = serde_json::to_value(FeatureCollection::new(vec![])).unwrap();
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn sort_is_ascending_and_stable() {
        let mut features = vec![
            feature(1, "far hotel", Some(1800)),
            feature(2, "near restaurant", Some(250)),
            feature(3, "also near", Some(250)),
            feature(4, "close hotel", Some(90)),
        ];

        sort_by_distance(&mut features);

        let ids: Vec<i32> = features.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }
}
