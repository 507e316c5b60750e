//! Geometry codec for the GeoJSON nested-object encoding.
//!
//! Tag dispatch is the GeoJSON `type` member, a closed enumeration over
//! Point, LineString, Polygon, the Multi variants, and GeometryCollection.
//! Widening it means extending decode and encode together.

use std::convert::TryFrom;

use docmap_core_common::{DocPath, MapError, MapResult};
use geo_types::Geometry;
use geojson::Geometry as GeoJsonGeometry;
use serde_json::Value;

/// Parse the nested object at the geometry slot into a geometry value.
pub(crate) fn decode(path: &DocPath, value: &Value) -> MapResult<Geometry<f64>> {
    let parsed = GeoJsonGeometry::from_json_value(value.clone())
        .map_err(|err| MapError::malformed_geometry(path, err.to_string()))?;
    Geometry::try_from(parsed).map_err(|err| {
        MapError::malformed_geometry(path, format!("failed to convert GeoJSON geometry: {err}"))
    })
}

/// Produce the GeoJSON nested-object encoding of a geometry value.
pub(crate) fn encode(path: &DocPath, geometry: &Geometry<f64>) -> MapResult<Value> {
    let encoded = GeoJsonGeometry::new(geojson::Value::from(geometry));
    serde_json::to_value(&encoded)
        .map_err(|err| MapError::malformed_geometry(path, err.to_string()))
}
