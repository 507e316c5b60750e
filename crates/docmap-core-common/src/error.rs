//! Mapping-layer error taxonomy.
//!
//! The mapping layer surfaces exactly two named failures; everything else is
//! deliberate degradation. An unsupported property type drops the attribute
//! from the schema (with a diagnostic), and a property missing from one
//! document reads as absent. There is no catch-all variant.

use thiserror::Error;

use crate::document::DocPath;

/// Errors surfaced by mapping-strategy operations.
#[derive(Debug, Error)]
pub enum MapError {
    /// Geometry slot present but structurally unrecognized, or coordinate
    /// data inconsistent with the claimed geometry tag.
    #[error("Malformed geometry at '{path}': {message}")]
    MalformedGeometry {
        /// Dotted physical path of the geometry slot.
        path: String,
        /// What failed to parse or encode.
        message: String,
    },

    /// The collection yielded no document at schema-inference time and the
    /// strategy is configured to fail rather than degrade to the
    /// geometry-only schema.
    #[error("No sample document available for collection '{collection}'")]
    NoSampleAvailable {
        /// Collection identity the schema was requested for.
        collection: String,
    },
}

impl MapError {
    /// Creates a [`MapError::MalformedGeometry`] for the slot at `path`.
    #[must_use]
    pub fn malformed_geometry(path: &DocPath, message: impl Into<String>) -> Self {
        Self::MalformedGeometry {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Creates a [`MapError::NoSampleAvailable`] for `collection`.
    #[must_use]
    pub fn no_sample(collection: impl Into<String>) -> Self {
        Self::NoSampleAvailable {
            collection: collection.into(),
        }
    }
}

/// Result type alias for mapping-strategy operations.
pub type MapResult<T> = std::result::Result<T, MapError>;
