//! Flat-document mapping for `docmap`.
//!
//! Mapping strategy for the legacy flat layout: the geometry is a bare
//! coordinate pair (`loc: [x, y]`) and every other top-level field is a
//! feature property. The store's identifier key and the geometry field are
//! excluded from inference.
//!
//! The geometry tag set of this encoding is {Point} in both directions:
//! decoding anything but a numeric pair and encoding anything but a point
//! fail as malformed. Widening the set is a strategy extension, not a
//! configuration.

use docmap_core_common::{
    AttributeDescriptor, CollectionMapper, DocPath, EmptySamplePolicy, FeatureSchema,
    InferredSchema, MapError, MapResult, SampleSource, SkippedField, ValueType, describe_value,
};
use geo_types::{Geometry, Point};
use log::debug;
use serde_json::{Value, json};

/// Options controlling the flat mapping.
#[derive(Debug, Clone)]
pub struct FlatMapperOptions {
    /// Document field holding the coordinate pair.
    pub geometry_field: String,
    /// Store identifier key excluded from inference.
    pub id_field: String,
    /// Behaviour when the collection yields no sample document.
    pub empty_sample_policy: EmptySamplePolicy,
}

impl Default for FlatMapperOptions {
    fn default() -> Self {
        Self {
            geometry_field: "loc".to_string(),
            id_field: "_id".to_string(),
            empty_sample_policy: EmptySamplePolicy::default(),
        }
    }
}

impl FlatMapperOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_geometry_field(mut self, name: impl Into<String>) -> Self {
        self.geometry_field = name.into();
        self
    }

    #[must_use]
    pub fn with_id_field(mut self, name: impl Into<String>) -> Self {
        self.id_field = name.into();
        self
    }

    #[must_use]
    pub fn with_empty_sample_policy(mut self, policy: EmptySamplePolicy) -> Self {
        self.empty_sample_policy = policy;
        self
    }
}

/// Mapping strategy for flat documents with coordinate-pair geometry.
#[derive(Debug, Clone, Default)]
pub struct FlatMapper {
    options: FlatMapperOptions,
}

impl FlatMapper {
    #[must_use]
    pub fn new(options: FlatMapperOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &FlatMapperOptions {
        &self.options
    }
}

impl CollectionMapper for FlatMapper {
    fn geometry_path(&self) -> DocPath {
        DocPath::field(&self.options.geometry_field)
    }

    fn property_path(&self, name: &str) -> DocPath {
        DocPath::field(name)
    }

    fn build_schema(
        &self,
        collection: &str,
        source: &dyn SampleSource,
    ) -> MapResult<InferredSchema> {
        let Some(document) = source.one_document() else {
            return match self.options.empty_sample_policy {
                EmptySamplePolicy::Fail => Err(MapError::no_sample(collection)),
                EmptySamplePolicy::GeometryOnly => Ok(InferredSchema {
                    schema: FeatureSchema::new(collection, self.geometry_path()),
                    skipped: Vec::new(),
                }),
            };
        };

        let mut schema = FeatureSchema::new(collection, self.geometry_path());
        let mut skipped = Vec::new();

        for (key, value) in &document {
            if key == &self.options.geometry_field || key == &self.options.id_field {
                continue;
            }
            let value_type = ValueType::classify(value);
            if value_type.is_supported() {
                schema.push_attribute(AttributeDescriptor::new(
                    key,
                    value_type,
                    self.property_path(key),
                ));
            } else {
                debug!(
                    "collection '{collection}': skipping field '{key}' ({} has no supported type)",
                    describe_value(value)
                );
                skipped.push(SkippedField::from_value(key, value));
            }
        }

        Ok(InferredSchema { schema, skipped })
    }

    fn decode_geometry(&self, value: &Value) -> MapResult<Geometry<f64>> {
        let path = self.geometry_path();
        let Some(pair) = value.as_array() else {
            return Err(MapError::malformed_geometry(
                &path,
                format!("expected a coordinate pair, found {}", describe_value(value)),
            ));
        };
        let [x, y] = pair.as_slice() else {
            return Err(MapError::malformed_geometry(
                &path,
                format!("expected exactly two coordinates, found {}", pair.len()),
            ));
        };
        match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => Ok(Geometry::Point(Point::new(x, y))),
            _ => Err(MapError::malformed_geometry(
                &path,
                "coordinate pair members must be numbers",
            )),
        }
    }

    fn encode_geometry(&self, geometry: &Geometry<f64>) -> MapResult<Value> {
        match geometry {
            Geometry::Point(point) => Ok(json!([point.x(), point.y()])),
            _ => Err(MapError::malformed_geometry(
                &self.geometry_path(),
                "the coordinate-pair encoding covers points only",
            )),
        }
    }
}
