//! Feature-schema types and representative-value classification.
//!
//! A [`FeatureSchema`] is the typed view a query or rendering engine consumes:
//! an ordered attribute list with a fixed geometry attribute first. Schemas
//! are inferred once per collection from a single sample document; fields
//! whose sampled value has no supported scalar classification are omitted and
//! reported as [`SkippedField`] diagnostics rather than failing inference.

use std::fmt;

use serde_json::Value;

use crate::document::{DocPath, Document, describe_value};

/// Well-known logical name of the geometry attribute in every schema.
pub const GEOMETRY_ATTRIBUTE: &str = "geometry";

/// Value type of a feature attribute.
///
/// The supported scalar types mirror what a typed feature engine can bind;
/// [`ValueType::Unsupported`] never appears in a schema and only reports a
/// classification miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// UTF-8 text.
    String,
    /// Whole number representable as a 64-bit integer.
    Integer,
    /// IEEE double-precision number.
    Double,
    /// True/false.
    Boolean,
    /// Temporal instant, stored in the document's extended-JSON date form.
    Date,
    /// The geometry attribute.
    Geometry,
    /// No supported classification; the field is omitted from the schema.
    Unsupported,
}

impl ValueType {
    /// Classify one representative value via the fixed precedence table:
    /// Boolean, Integer, Double, Date, String. First structural match wins.
    ///
    /// `null`, arrays, and objects other than the extended-JSON date form
    /// classify as [`ValueType::Unsupported`].
    ///
    /// # Examples
    ///
    /// ```
    /// use docmap_core_common::schema::ValueType;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueType::classify(&json!(true)), ValueType::Boolean);
    /// assert_eq!(ValueType::classify(&json!(3)), ValueType::Integer);
    /// assert_eq!(ValueType::classify(&json!(3.5)), ValueType::Double);
    /// assert_eq!(
    ///     ValueType::classify(&json!({"$date": "2019-06-01T00:00:00Z"})),
    ///     ValueType::Date
    /// );
    /// assert_eq!(ValueType::classify(&json!("X")), ValueType::String);
    /// assert_eq!(ValueType::classify(&json!({"nested": 1})), ValueType::Unsupported);
    /// ```
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Double,
            Value::Object(map) if is_extended_date(map) => Self::Date,
            Value::String(_) => Self::String,
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Unsupported,
        }
    }

    /// Returns `true` for types a schema may carry.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// String label for display output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Geometry => "Geometry",
            Self::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extended-JSON date form: `{"$date": <rfc3339 string | epoch millis>}`.
fn is_extended_date(map: &Document) -> bool {
    if map.len() != 1 {
        return false;
    }
    match map.get("$date") {
        Some(Value::String(raw)) => chrono::DateTime::parse_from_rfc3339(raw).is_ok(),
        Some(Value::Number(millis)) => millis.is_i64(),
        _ => false,
    }
}

/// One named, typed attribute of a feature schema.
///
/// The physical path records where a mapping strategy stores the attribute
/// inside documents. It is strategy plumbing: constructors take it, the
/// feature view never displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDescriptor {
    name: String,
    value_type: ValueType,
    physical_path: DocPath,
}

impl AttributeDescriptor {
    /// Creates a descriptor for `name` bound at `physical_path`.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: ValueType, physical_path: DocPath) -> Self {
        Self {
            name: name.into(),
            value_type,
            physical_path,
        }
    }

    /// Logical attribute name, unique within a schema.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value type bound to the attribute.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Physical location backing the attribute. Strategy plumbing; not part
    /// of the feature view.
    #[must_use]
    pub fn physical_path(&self) -> &DocPath {
        &self.physical_path
    }
}

/// Ordered, named, typed attribute list with the geometry attribute first.
///
/// Built once per collection; attribute order defines column order for the
/// consuming engine. Callers are expected to memoize the schema per
/// collection identity; inference is deterministic but re-runs a sample
/// fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    name: String,
    attributes: Vec<AttributeDescriptor>,
}

impl FeatureSchema {
    /// Creates a schema for the collection `name` holding only the fixed
    /// geometry descriptor, located at `geometry_path`.
    #[must_use]
    pub fn new(name: impl Into<String>, geometry_path: DocPath) -> Self {
        Self {
            name: name.into(),
            attributes: vec![AttributeDescriptor::new(
                GEOMETRY_ATTRIBUTE,
                ValueType::Geometry,
                geometry_path,
            )],
        }
    }

    /// Appends a property descriptor. Names must be unique within the schema;
    /// inference guarantees this because document keys are unique.
    pub fn push_attribute(&mut self, descriptor: AttributeDescriptor) {
        self.attributes.push(descriptor);
    }

    /// Collection identity this schema was built for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All descriptors in column order, geometry first.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeDescriptor] {
        &self.attributes
    }

    /// The fixed geometry descriptor.
    #[must_use]
    pub fn geometry_descriptor(&self) -> &AttributeDescriptor {
        // Construction always seats the geometry descriptor first.
        &self.attributes[0]
    }

    /// Looks up a descriptor by logical name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Number of attributes, geometry included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always `false`: the geometry descriptor is fixed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A field omitted from an inferred schema, with the JSON kind that failed
/// classification.
///
/// Skipped fields remain physically present in documents but are invisible to
/// the typed feature view. Returning them alongside the schema keeps the
/// degrade-gracefully policy observable without capturing process output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    /// Document key that was skipped.
    pub name: String,
    /// JSON kind of the sampled value (see [`describe_value`]).
    pub found: &'static str,
}

impl SkippedField {
    /// Records `name` with the kind of its sampled `value`.
    #[must_use]
    pub fn from_value(name: impl Into<String>, value: &Value) -> Self {
        Self {
            name: name.into(),
            found: describe_value(value),
        }
    }
}

/// Result of schema inference: the schema plus its skipped-field diagnostics.
#[derive(Debug, Clone)]
pub struct InferredSchema {
    /// The inferred feature schema.
    pub schema: FeatureSchema,
    /// Fields omitted because their sampled value had no supported type.
    pub skipped: Vec<SkippedField>,
}

/// Policy for a collection that yields no sample document at inference time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySamplePolicy {
    /// Emit the geometry-only schema.
    #[default]
    GeometryOnly,
    /// Surface [`crate::error::MapError::NoSampleAvailable`].
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_precedence_table() {
        assert_eq!(ValueType::classify(&json!(false)), ValueType::Boolean);
        assert_eq!(ValueType::classify(&json!(7)), ValueType::Integer);
        assert_eq!(ValueType::classify(&json!(-7)), ValueType::Integer);
        assert_eq!(ValueType::classify(&json!(7.25)), ValueType::Double);
        assert_eq!(ValueType::classify(&json!("7")), ValueType::String);
    }

    #[test]
    fn classify_extended_json_dates() {
        assert_eq!(
            ValueType::classify(&json!({"$date": "2019-06-01T12:30:00+02:00"})),
            ValueType::Date
        );
        assert_eq!(
            ValueType::classify(&json!({"$date": 1559385000000i64})),
            ValueType::Date
        );
        // Not a date: bad timestamp, extra keys, wrong value kind.
        assert_eq!(
            ValueType::classify(&json!({"$date": "yesterday"})),
            ValueType::Unsupported
        );
        assert_eq!(
            ValueType::classify(&json!({"$date": "2019-06-01T00:00:00Z", "tz": "UTC"})),
            ValueType::Unsupported
        );
        assert_eq!(
            ValueType::classify(&json!({"$date": true})),
            ValueType::Unsupported
        );
    }

    #[test]
    fn classify_unsupported_shapes() {
        assert_eq!(ValueType::classify(&json!(null)), ValueType::Unsupported);
        assert_eq!(ValueType::classify(&json!([1, 2])), ValueType::Unsupported);
        assert_eq!(
            ValueType::classify(&json!({"nested": {}})),
            ValueType::Unsupported
        );
        assert!(!ValueType::Unsupported.is_supported());
        assert!(ValueType::Date.is_supported());
    }

    #[test]
    fn schema_seats_geometry_first() {
        let schema = FeatureSchema::new("rivers", DocPath::field("geometry"));
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.geometry_descriptor().name(), GEOMETRY_ATTRIBUTE);
        assert_eq!(
            schema.geometry_descriptor().value_type(),
            ValueType::Geometry
        );
    }

    #[test]
    fn schema_preserves_attribute_order() {
        let mut schema = FeatureSchema::new("cities", DocPath::field("geometry"));
        schema.push_attribute(AttributeDescriptor::new(
            "name",
            ValueType::String,
            DocPath::nested("properties", "name"),
        ));
        schema.push_attribute(AttributeDescriptor::new(
            "count",
            ValueType::Integer,
            DocPath::nested("properties", "count"),
        ));

        let names: Vec<_> = schema.attributes().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["geometry", "name", "count"]);
        assert_eq!(
            schema.attribute("count").map(AttributeDescriptor::value_type),
            Some(ValueType::Integer)
        );
        assert!(schema.attribute("missing").is_none());
    }

    #[test]
    fn skipped_field_records_json_kind() {
        let skipped = SkippedField::from_value("tags", &json!(["a", "b"]));
        assert_eq!(skipped.name, "tags");
        assert_eq!(skipped.found, "array");
    }
}
