//! The GeoJSON-shaped mapping strategy.

use docmap_core_common::{
    AttributeDescriptor, CollectionMapper, DocPath, EmptySamplePolicy, FeatureSchema,
    InferredSchema, MapError, MapResult, SampleSource, SkippedField, ValueType, describe_value,
};
use geo_types::Geometry;
use log::debug;
use serde_json::Value;

use crate::codec;

/// Options controlling the GeoJSON-shaped mapping.
#[derive(Debug, Clone)]
pub struct GeoJsonMapperOptions {
    /// Document field holding the GeoJSON geometry object.
    pub geometry_field: String,
    /// Document field holding the free-form properties bag.
    pub properties_field: String,
    /// Behaviour when the collection yields no sample document.
    pub empty_sample_policy: EmptySamplePolicy,
}

impl Default for GeoJsonMapperOptions {
    fn default() -> Self {
        Self {
            geometry_field: "geometry".to_string(),
            properties_field: "properties".to_string(),
            empty_sample_policy: EmptySamplePolicy::default(),
        }
    }
}

impl GeoJsonMapperOptions {
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
    pub fn with_properties_field(mut self, name: impl Into<String>) -> Self {
        self.properties_field = name.into();
        self
    }

    #[must_use]
    pub fn with_empty_sample_policy(mut self, policy: EmptySamplePolicy) -> Self {
        self.empty_sample_policy = policy;
        self
    }
}

/// Mapping strategy for collections storing valid GeoJSON features.
///
/// Geometry lives in a top-level nested object under the configured geometry
/// field; every logical attribute resolves to its name nested one level under
/// the configured properties field.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonMapper {
    options: GeoJsonMapperOptions,
}

impl GeoJsonMapper {
    #[must_use]
    pub fn new(options: GeoJsonMapperOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &GeoJsonMapperOptions {
        &self.options
    }
}

impl CollectionMapper for GeoJsonMapper {
    fn geometry_path(&self) -> DocPath {
        DocPath::field(&self.options.geometry_field)
    }

    fn property_path(&self, name: &str) -> DocPath {
        DocPath::nested(&self.options.properties_field, name)
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

        if let Some(Value::Object(properties)) = document.get(&self.options.properties_field) {
            for (key, value) in properties {
                let value_type = ValueType::classify(value);
                if value_type.is_supported() {
                    schema.push_attribute(AttributeDescriptor::new(
                        key,
                        value_type,
                        self.property_path(key),
                    ));
                } else {
                    debug!(
                        "collection '{collection}': skipping property '{key}' ({} has no supported type)",
                        describe_value(value)
                    );
                    skipped.push(SkippedField::from_value(key, value));
                }
            }
        }

        Ok(InferredSchema { schema, skipped })
    }

    fn decode_geometry(&self, value: &Value) -> MapResult<Geometry<f64>> {
        codec::decode(&self.geometry_path(), value)
    }

    fn encode_geometry(&self, geometry: &Geometry<f64>) -> MapResult<Value> {
        codec::encode(&self.geometry_path(), geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_core_common::{Document, InMemorySampleSource};
    use serde_json::json;

    fn document(value: Value) -> Document {
        value.as_object().cloned().expect("test document")
    }

    fn sample_source(value: Value) -> InMemorySampleSource {
        InMemorySampleSource::new(vec![document(value)])
    }

    #[test]
    fn property_paths_are_deterministic() {
        let mapper = GeoJsonMapper::default();
        assert_eq!(mapper.geometry_path().to_string(), "geometry");
        assert_eq!(
            mapper.property_path("population").to_string(),
            "properties.population"
        );
        // Same name, same path, regardless of how often we ask.
        assert_eq!(
            mapper.property_path("population"),
            mapper.property_path("population")
        );
    }

    #[test]
    fn custom_container_names() {
        let mapper = GeoJsonMapper::new(
            GeoJsonMapperOptions::new()
                .with_geometry_field("geom")
                .with_properties_field("attrs"),
        );
        assert_eq!(mapper.geometry_path().to_string(), "geom");
        assert_eq!(mapper.property_path("name").to_string(), "attrs.name");
    }

    #[test]
    fn infers_schema_from_sample_document() {
        let mapper = GeoJsonMapper::default();
        let source = sample_source(json!({
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
            "properties": {"name": "X", "count": 3}
        }));

        let inferred = mapper.build_schema("cities", &source).expect("schema");
        let attrs: Vec<_> = inferred
            .schema
            .attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.value_type()))
            .collect();

        assert_eq!(
            attrs,
            vec![
                ("geometry".to_string(), ValueType::Geometry),
                ("name".to_string(), ValueType::String),
                ("count".to_string(), ValueType::Integer),
            ]
        );
        assert!(inferred.skipped.is_empty());
        assert_eq!(inferred.schema.name(), "cities");
    }

    #[test]
    fn inference_is_stable_for_the_same_sample() {
        let mapper = GeoJsonMapper::default();
        let source = sample_source(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "properties": {"b": 1, "a": "x", "flag": true}
        }));

        let first = mapper.build_schema("stable", &source).expect("schema");
        let second = mapper.build_schema("stable", &source).expect("schema");
        assert_eq!(first.schema, second.schema);
    }

    #[test]
    fn unsupported_property_is_omitted_not_an_error() {
        let mapper = GeoJsonMapper::default();
        let source = sample_source(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "properties": {"name": "X", "address": {"street": "Main"}, "count": 3}
        }));

        let inferred = mapper.build_schema("places", &source).expect("schema");
        let names: Vec<_> = inferred
            .schema
            .attributes()
            .iter()
            .map(AttributeDescriptor::name)
            .collect();

        assert_eq!(names, vec!["geometry", "name", "count"]);
        assert_eq!(
            inferred.skipped,
            vec![SkippedField {
                name: "address".to_string(),
                found: "object",
            }]
        );
    }

    #[test]
    fn document_without_properties_yields_geometry_only_schema() {
        let mapper = GeoJsonMapper::default();
        let source = sample_source(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        }));

        let inferred = mapper.build_schema("bare", &source).expect("schema");
        assert_eq!(inferred.schema.len(), 1);
    }

    #[test]
    fn empty_collection_defaults_to_geometry_only() {
        let mapper = GeoJsonMapper::default();
        let inferred = mapper
            .build_schema("empty", &InMemorySampleSource::empty())
            .expect("geometry-only schema");

        assert_eq!(inferred.schema.len(), 1);
        assert_eq!(inferred.schema.geometry_descriptor().name(), "geometry");
    }

    #[test]
    fn empty_collection_fails_when_configured() {
        let mapper = GeoJsonMapper::new(
            GeoJsonMapperOptions::new().with_empty_sample_policy(EmptySamplePolicy::Fail),
        );
        let err = mapper
            .build_schema("empty", &InMemorySampleSource::empty())
            .unwrap_err();

        assert!(matches!(
            err,
            MapError::NoSampleAvailable { ref collection } if collection == "empty"
        ));
    }

    #[test]
    fn read_geometry_returns_the_stored_point() {
        let mapper = GeoJsonMapper::default();
        let doc = document(json!({
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
            "properties": {}
        }));

        let geometry = mapper.read_geometry(&doc).expect("point");
        assert_eq!(geometry, Geometry::Point(geo_types::Point::new(1.0, 2.0)));
    }

    #[test]
    fn read_geometry_on_missing_slot_is_malformed() {
        let mapper = GeoJsonMapper::default();
        let doc = document(json!({"properties": {}}));

        let err = mapper.read_geometry(&doc).unwrap_err();
        assert!(matches!(err, MapError::MalformedGeometry { .. }));
    }

    #[test]
    fn write_geometry_replaces_the_slot_in_place() {
        let mapper = GeoJsonMapper::default();
        let mut doc = document(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "properties": {"name": "X"}
        }));

        let point = Geometry::Point(geo_types::Point::new(5.0, 10.0));
        mapper.write_geometry(&mut doc, &point).expect("write");

        assert_eq!(mapper.read_geometry(&doc).expect("read back"), point);
        // Untouched slots survive the write.
        assert_eq!(mapper.read_property(&doc, "name"), Some(&json!("X")));
    }

    #[test]
    fn read_property_on_missing_field_is_absent() {
        let mapper = GeoJsonMapper::default();
        let doc = document(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "properties": {"name": "X"}
        }));

        assert!(mapper.read_property(&doc, "population").is_none());
    }

    #[test]
    fn write_then_read_property_on_the_same_document() {
        let mapper = GeoJsonMapper::default();
        let mut doc = document(json!({
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
        }));

        mapper.write_property(&mut doc, "population", json!(42));
        assert_eq!(mapper.read_property(&doc, "population"), Some(&json!(42)));
    }
}
