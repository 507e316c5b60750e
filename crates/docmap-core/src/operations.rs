//! High-level mapping operations.
//!
//! This module dispatches a registry strategy to its implementation and
//! exposes the operations tooling needs: schema inference for a named
//! collection and geometry extraction over a document set.

use docmap_core_common::{CollectionMapper, Document, InferredSchema, SampleSource};
use docmap_flat::FlatMapper;
use docmap_geojson::GeoJsonMapper;
use geo_types::Geometry;
use log::info;

use crate::error::{Result, StrategyError, strategy_not_found};
use crate::registry::{Strategy, find_strategy};
use crate::types::{AttributeInfo, CollectionInfo, SkippedFieldInfo};

/// Instantiates the mapper implementing a registry strategy, with default
/// options.
///
/// # Errors
///
/// Returns [`StrategyError::NotImplemented`] for registered strategies whose
/// implementation has not landed yet.
pub fn create_mapper(strategy: &Strategy) -> Result<Box<dyn CollectionMapper>> {
    match strategy.short_name {
        "geojson" => Ok(Box::new(GeoJsonMapper::default())),
        "flat" => Ok(Box::new(FlatMapper::default())),
        _ => Err(StrategyError::NotImplemented {
            strategy: strategy.short_name.to_string(),
        }
        .into()),
    }
}

/// Infers the feature schema for `collection` using the named strategy.
///
/// # Errors
///
/// Returns a strategy error when the name is unknown, unimplemented, or does
/// not support inference, and passes through mapping-layer failures.
pub fn infer_schema(
    collection: &str,
    strategy_name: &str,
    source: &dyn SampleSource,
) -> Result<InferredSchema> {
    let strategy = find_strategy(strategy_name).ok_or_else(|| strategy_not_found(strategy_name))?;
    if !strategy.capabilities.infer.is_supported() {
        return Err(StrategyError::OperationNotSupported {
            strategy: strategy.short_name.to_string(),
            operation: "schema inference".to_string(),
        }
        .into());
    }

    info!(
        "Inferring schema for collection '{collection}' (strategy: {})",
        strategy.short_name
    );
    let mapper = create_mapper(&strategy)?;
    let inferred = mapper.build_schema(collection, source)?;
    info!(
        "Inferred {} attribute(s), {} field(s) skipped",
        inferred.schema.len(),
        inferred.skipped.len()
    );
    Ok(inferred)
}

/// Infers the schema and packages it for display.
///
/// # Errors
///
/// Same conditions as [`infer_schema`].
pub fn describe_collection(
    collection: &str,
    strategy_name: &str,
    source: &dyn SampleSource,
) -> Result<CollectionInfo> {
    let strategy = find_strategy(strategy_name).ok_or_else(|| strategy_not_found(strategy_name))?;
    let inferred = infer_schema(collection, strategy.short_name, source)?;

    Ok(CollectionInfo {
        collection: collection.to_string(),
        strategy: strategy.short_name.to_string(),
        strategy_description: strategy.description.to_string(),
        attributes: inferred
            .schema
            .attributes()
            .iter()
            .map(|a| AttributeInfo {
                name: a.name().to_string(),
                value_type: a.value_type().to_string(),
            })
            .collect(),
        skipped: inferred
            .skipped
            .iter()
            .map(|s| SkippedFieldInfo {
                name: s.name.clone(),
                found: s.found.to_string(),
            })
            .collect(),
    })
}

/// Decodes the geometry of up to `limit` documents using the named strategy.
///
/// # Errors
///
/// Returns a strategy error when the name is unknown or does not support
/// geometry reads, and [`docmap_core_common::MapError::MalformedGeometry`]
/// for the first document whose geometry slot fails to decode.
pub fn read_geometries(
    strategy_name: &str,
    documents: &[Document],
    limit: Option<usize>,
) -> Result<Vec<Geometry<f64>>> {
    let strategy = find_strategy(strategy_name).ok_or_else(|| strategy_not_found(strategy_name))?;
    if !strategy.capabilities.read.is_supported() {
        return Err(StrategyError::OperationNotSupported {
            strategy: strategy.short_name.to_string(),
            operation: "geometry reads".to_string(),
        }
        .into());
    }

    let mapper = create_mapper(&strategy)?;
    let mut geometries = Vec::new();
    for document in documents {
        if let Some(max) = limit
            && geometries.len() >= max
        {
            break;
        }
        geometries.push(mapper.read_geometry(document)?);
    }
    info!("Decoded {} geometr(ies)", geometries.len());
    Ok(geometries)
}
