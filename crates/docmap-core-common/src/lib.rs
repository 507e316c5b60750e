//! `docmap-core-common` is the shared contract layer for the `docmap` project.
//!
//! Mapping strategies translate one document "shape" (field layout convention)
//! into a typed feature schema and back. This crate defines everything a
//! strategy implementation and its callers agree on:
//!
//! - **Document model**: nested string-keyed documents and physical-path
//!   navigation ([`document`]).
//! - **Feature schema**: ordered, typed attribute descriptors with a fixed
//!   geometry attribute, plus value classification ([`schema`]).
//! - **Strategy contract**: the [`mapper::CollectionMapper`] trait combining
//!   path resolution, the geometry codec, and schema inference behind one
//!   seam, and the [`mapper::SampleSource`] collaborator it infers from.
//! - **Errors**: the narrow mapping-layer taxonomy ([`error`]).
//!
//! Concrete strategies live in their own crates under `crates/mappers/` and
//! are selected by the registry in `docmap-core`.

pub mod document;
pub mod error;
pub mod mapper;
pub mod sample;
pub mod schema;

pub use document::{DocPath, Document, describe_value};
pub use error::{MapError, MapResult};
pub use mapper::{CollectionMapper, SampleSource};
pub use sample::InMemorySampleSource;
pub use schema::{
    AttributeDescriptor, EmptySamplePolicy, FeatureSchema, GEOMETRY_ATTRIBUTE, InferredSchema,
    SkippedField, ValueType,
};
