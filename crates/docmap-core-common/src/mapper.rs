//! The collection-mapper strategy contract.
//!
//! One trait combines the three leaf concerns (path resolution, the geometry
//! codec, and schema inference) so the host engine can swap document shapes
//! per collection without touching calling code. Implementations provide the
//! strategy-specific hooks; the shared read/write delegation is provided here.

use geo_types::Geometry;
use serde_json::Value;

use crate::document::{DocPath, Document};
use crate::error::{MapError, MapResult};
use crate::schema::InferredSchema;

/// Source of one representative document for schema inference.
///
/// This is the only document fetch the mapping layer performs; everything
/// else receives documents from the caller.
pub trait SampleSource {
    /// Fetch one document, or `None` for an empty collection.
    fn one_document(&self) -> Option<Document>;
}

/// A mapping strategy: one document shape translated to and from the typed
/// feature view.
///
/// Implementations are stateless or hold only immutable configuration after
/// construction, making them safe for concurrent use without locking as long
/// as each call receives its own document. No method suspends, blocks, or
/// performs I/O.
///
/// Read and write go through the same strategy instance, which makes the two
/// directions inverses for a given document shape.
pub trait CollectionMapper: Send + Sync + std::fmt::Debug {
    /// Physical location of the geometry slot. Fixed per strategy.
    fn geometry_path(&self) -> DocPath;

    /// Physical location backing the logical attribute `name`.
    ///
    /// Pure, injective, and deterministic per strategy: the same `name` maps
    /// to the same path on every call, for any document. Any string is a
    /// valid attribute name.
    fn property_path(&self, name: &str) -> DocPath;

    /// Derive the typed schema for `collection` from one sample document.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoSampleAvailable`] when the source yields no
    /// document and the strategy is configured to fail on empty collections.
    fn build_schema(
        &self,
        collection: &str,
        source: &dyn SampleSource,
    ) -> MapResult<InferredSchema>;

    /// Parse the store-native geometry encoding into a geometry value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedGeometry`] when `value` matches none of
    /// the strategy's geometry tags or carries inconsistent coordinate data.
    fn decode_geometry(&self, value: &Value) -> MapResult<Geometry<f64>>;

    /// Produce the store-native encoding of `geometry`.
    ///
    /// Must be a left inverse of [`decode_geometry`][Self::decode_geometry]:
    /// any value the decoder can produce encodes back to a representation
    /// that decodes structurally equal.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedGeometry`] when the strategy's tag set
    /// does not cover this geometry family.
    fn encode_geometry(&self, geometry: &Geometry<f64>) -> MapResult<Value>;

    /// Read and decode the geometry slot of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedGeometry`] when the slot is missing or
    /// fails to decode.
    fn read_geometry(&self, document: &Document) -> MapResult<Geometry<f64>> {
        let path = self.geometry_path();
        let Some(value) = path.read(document) else {
            return Err(MapError::malformed_geometry(&path, "geometry slot is missing"));
        };
        self.decode_geometry(value)
    }

    /// Encode `geometry` and set it at the geometry slot, mutating `document`
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::MalformedGeometry`] when encoding fails.
    fn write_geometry(&self, document: &mut Document, geometry: &Geometry<f64>) -> MapResult<()> {
        let encoded = self.encode_geometry(geometry)?;
        self.geometry_path().write(document, encoded);
        Ok(())
    }

    /// Read the value backing the logical attribute `name`.
    ///
    /// Returns `None` (absent, not an error) when this particular document
    /// lacks the backing slot. Per-document field heterogeneity is expected
    /// in a schemaless store.
    fn read_property<'a>(&self, document: &'a Document, name: &str) -> Option<&'a Value> {
        self.property_path(name).read(document)
    }

    /// Set the value backing the logical attribute `name`, creating
    /// intermediate containers as needed and mutating `document` in place.
    fn write_property(&self, document: &mut Document, name: &str, value: Value) {
        self.property_path(name).write(document, value);
    }
}
