//! Document model and physical-path navigation.
//!
//! A [`Document`] is a nested string-keyed record owned by the document-store
//! driver. The mapper borrows documents for the duration of one read or write
//! call and touches them only at the slots named by a [`DocPath`].

use std::fmt;

use serde_json::Value;

/// A schemaless nested record: string keys to JSON values, in the document's
/// own key order.
pub type Document = serde_json::Map<String, Value>;

/// Physical location of a value inside a nested document, as a dot-free
/// sequence of container keys.
///
/// A `DocPath` is computed by a mapping strategy's path resolver and is a pure
/// function of the strategy, never of a document instance. The dotted
/// [`Display`](fmt::Display) form is for diagnostics only; navigation always
/// goes segment by segment, so keys containing `.` are unambiguous.
///
/// # Examples
///
/// ```
/// use docmap_core_common::document::DocPath;
/// use serde_json::json;
///
/// let doc = json!({"properties": {"name": "Monaco"}});
/// let doc = doc.as_object().unwrap();
///
/// let path = DocPath::nested("properties", "name");
/// assert_eq!(path.read(doc), Some(&json!("Monaco")));
/// assert_eq!(path.to_string(), "properties.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPath {
    segments: Vec<String>,
}

impl DocPath {
    /// A path to a top-level field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// A path to a field nested one level under `container`.
    #[must_use]
    pub fn nested(container: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            segments: vec![container.into(), name.into()],
        }
    }

    /// A path from an explicit segment sequence.
    #[must_use]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The container keys traversed by this path, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Navigate `document` and return the value at this path.
    ///
    /// Returns `None` when any segment is missing or a non-terminal segment
    /// holds a non-object value. Absence is expected: documents of the same
    /// collection need not share a field set.
    #[must_use]
    pub fn read<'a>(&self, document: &'a Document) -> Option<&'a Value> {
        let (last, parents) = self.segments.split_last()?;
        let mut current = document;
        for segment in parents {
            current = current.get(segment)?.as_object()?;
        }
        current.get(last)
    }

    /// Set the value at this path, creating intermediate containers as needed.
    ///
    /// A non-object value sitting in the middle of the path loses to the
    /// write: the write-back point owns that slot.
    pub fn write(&self, document: &mut Document, value: Value) {
        let Some((last, parents)) = self.segments.split_last() else {
            return;
        };
        let mut current = document;
        for segment in parents {
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Document::new()));
            if !slot.is_object() {
                *slot = Value::Object(Document::new());
            }
            let Value::Object(next) = slot else {
                return;
            };
            current = next;
        }
        current.insert(last.clone(), value);
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Helper to describe JSON value kinds for diagnostics.
#[must_use]
pub fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        value.as_object().cloned().expect("test document")
    }

    #[test]
    fn read_top_level_field() {
        let doc = document(json!({"name": "Monaco"}));
        assert_eq!(DocPath::field("name").read(&doc), Some(&json!("Monaco")));
    }

    #[test]
    fn read_nested_field() {
        let doc = document(json!({"properties": {"population": 38300}}));
        let path = DocPath::nested("properties", "population");
        assert_eq!(path.read(&doc), Some(&json!(38300)));
    }

    #[test]
    fn read_missing_segment_is_absent() {
        let doc = document(json!({"properties": {}}));
        assert!(DocPath::nested("properties", "name").read(&doc).is_none());
        assert!(DocPath::field("geometry").read(&doc).is_none());
    }

    #[test]
    fn read_through_scalar_is_absent() {
        let doc = document(json!({"properties": 7}));
        assert!(DocPath::nested("properties", "name").read(&doc).is_none());
    }

    #[test]
    fn write_creates_intermediate_containers() {
        let mut doc = Document::new();
        DocPath::nested("properties", "name").write(&mut doc, json!("X"));
        assert_eq!(
            Value::Object(doc),
            json!({"properties": {"name": "X"}})
        );
    }

    #[test]
    fn write_replaces_scalar_intermediate() {
        let mut doc = document(json!({"properties": "not a container"}));
        DocPath::nested("properties", "count").write(&mut doc, json!(3));
        assert_eq!(Value::Object(doc), json!({"properties": {"count": 3}}));
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut doc = Document::new();
        let path = DocPath::nested("properties", "population");
        path.write(&mut doc, json!(42));
        assert_eq!(path.read(&doc), Some(&json!(42)));
    }

    #[test]
    fn display_joins_segments_with_dots() {
        assert_eq!(DocPath::field("geometry").to_string(), "geometry");
        assert_eq!(
            DocPath::nested("properties", "name").to_string(),
            "properties.name"
        );
    }
}
