//! GeoJSON-shaped document mapping for `docmap`.
//!
//! The reference mapping strategy: documents carry a top-level `geometry`
//! object in the GeoJSON encoding and a free-form `properties` bag, mirroring
//! a stored GeoJSON feature. Container names are configurable through
//! [`GeoJsonMapperOptions`].

mod codec;
mod mapper;

pub use mapper::{GeoJsonMapper, GeoJsonMapperOptions};
