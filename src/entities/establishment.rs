use geo_types::{Geometry, Point};
use serde::{Deserialize, Serialize};

/// WGS84 decimal degrees, longitude first when serialized as geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl From<Coordinates> for Geometry<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude).into()
    }
}

/// Confirmation payload for a delete request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    pub id: i32,
    pub name: String,
}

impl Deleted {
    pub fn new(id: i32, name: String) -> Self {
        Self {
            message: "establishment deleted".into(),
            id,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_convert_to_a_point() {
        let coordinates = Coordinates {
            longitude: 2.17,
            latitude: 41.38,
        };

        let geometry: Geometry<f64> = coordinates.into();
        match geometry {
            Geometry::Point(point) => {
                assert_eq!(point.x(), 2.17);
                assert_eq!(point.y(), 41.38);
            }
            other => panic!("expected a point, got {:?}", other),
        }
    }
}
