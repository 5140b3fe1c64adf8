//! GeoJSON-shaped geometry values stored in JSON columns.
//!
//! Coordinates are `[lon, lat]` pairs in EPSG:4326 (WGS 84). The columns hold
//! plain GeoJSON objects, so other consumers of the tailings database can read
//! them without going through this service.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Spatial reference system for all stored geometries.
pub const SRID: u32 = 4326;

/// A GeoJSON `Point`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
#[serde(tag = "type", rename = "Point")]
pub struct Point {
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
}

/// A GeoJSON `Polygon`: one exterior ring, optionally followed by holes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
#[serde(tag = "type", rename = "Polygon")]
pub struct Polygon {
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

fn in_bounds(coord: &[f64; 2]) -> bool {
    let [lon, lat] = *coord;
    (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat)
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { coordinates: [lon, lat] }
    }

    pub fn is_valid(&self) -> bool {
        in_bounds(&self.coordinates)
    }
}

impl Polygon {
    /// At least one ring; each ring closed (first == last coordinate) with at
    /// least four positions, all within EPSG:4326 bounds.
    pub fn is_valid(&self) -> bool {
        !self.coordinates.is_empty()
            && self.coordinates.iter().all(|ring| {
                ring.len() >= 4 && ring.first() == ring.last() && ring.iter().all(in_bounds)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon {
            coordinates: vec![vec![
                [151.0, -33.0],
                [151.1, -33.0],
                [151.1, -33.1],
                [151.0, -33.1],
                [151.0, -33.0],
            ]],
        }
    }

    #[test]
    fn valid_polygon_passes() {
        assert!(square().is_valid());
    }

    #[test]
    fn unclosed_ring_fails() {
        let mut poly = square();
        poly.coordinates[0].pop();
        assert!(!poly.is_valid());
    }

    #[test]
    fn empty_polygon_fails() {
        assert!(!Polygon { coordinates: vec![] }.is_valid());
    }

    #[test]
    fn out_of_range_latitude_fails() {
        let mut poly = square();
        poly.coordinates[0][1] = [151.1, -91.0];
        assert!(!poly.is_valid());
        assert!(!Point::new(0.0, 90.5).is_valid());
    }

    #[test]
    fn serializes_as_geojson() {
        let json = serde_json::to_value(Point::new(151.2, -33.8)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "Point", "coordinates": [151.2, -33.8] })
        );
    }

    #[test]
    fn deserializes_from_geojson() {
        let poly: Polygon = serde_json::from_value(serde_json::json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        }))
        .unwrap();
        assert!(poly.is_valid());
    }
}
