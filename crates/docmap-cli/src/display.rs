//! Display utilities for formatting CLI output.
//!
//! This module provides table row structures and formatting functions for
//! presenting inferred schemas and strategy capabilities in a human-readable
//! format.

use tabled::{Table, Tabled};

use docmap_core::registry::Strategy;
use docmap_core::types::CollectionInfo;

/// Table row representation for displaying an inferred attribute.
#[derive(Tabled)]
pub struct AttributeRow {
    /// Logical attribute name.
    #[tabled(rename = "Attribute")]
    pub name: String,
    /// Value type bound to the attribute.
    #[tabled(rename = "Type")]
    pub value_type: String,
}

/// Table row representation for displaying a skipped field.
#[derive(Tabled)]
pub struct SkippedRow {
    /// Document key that was skipped.
    #[tabled(rename = "Field")]
    pub name: String,
    /// JSON kind of the sampled value.
    #[tabled(rename = "Sampled Kind")]
    pub found: String,
}

/// Table row representation for displaying strategy information.
#[derive(Tabled)]
pub struct StrategyRow {
    /// Short identifier for the strategy (e.g., `geojson`, `flat`).
    #[tabled(rename = "Strategy")]
    pub short_name: String,
    /// Full descriptive name of the document shape.
    #[tabled(rename = "Description")]
    pub description: String,
    /// Support status for schema inference.
    #[tabled(rename = "Infer")]
    pub infer: String,
    /// Support status for geometry reads.
    #[tabled(rename = "Read")]
    pub read: String,
    /// Support status for geometry writes.
    #[tabled(rename = "Write")]
    pub write: String,
}

/// Display an inferred collection schema in a formatted table.
pub fn display_collection_info(info: &CollectionInfo) {
    println!("\nCollection: {}", info.collection);
    println!("Strategy: {} ({})", info.strategy, info.strategy_description);

    println!("\n=== Attributes ===");
    let attribute_rows: Vec<AttributeRow> = info
        .attributes
        .iter()
        .map(|a| AttributeRow {
            name: a.name.clone(),
            value_type: a.value_type.clone(),
        })
        .collect();
    println!("{}", Table::new(attribute_rows));

    if !info.skipped.is_empty() {
        println!("\n=== Skipped Fields ===");
        let skipped_rows: Vec<SkippedRow> = info
            .skipped
            .iter()
            .map(|s| SkippedRow {
                name: s.name.clone(),
                found: s.found.clone(),
            })
            .collect();
        println!("{}", Table::new(skipped_rows));
        println!(
            "Skipped fields stay in documents but are invisible to the typed feature view."
        );
    }
}

/// Display the strategy registry in a formatted table.
pub fn display_strategies(strategies: &[Strategy]) {
    let rows: Vec<StrategyRow> = strategies
        .iter()
        .map(|s| StrategyRow {
            short_name: s.short_name.to_string(),
            description: s.description.to_string(),
            infer: s.capabilities.infer.as_str().to_string(),
            read: s.capabilities.read.as_str().to_string(),
            write: s.capabilities.write.as_str().to_string(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_core::types::{AttributeInfo, SkippedFieldInfo};

    #[test]
    fn attribute_row_creation() {
        let row = AttributeRow {
            name: "population".to_string(),
            value_type: "Integer".to_string(),
        };
        assert_eq!(row.name, "population");
        assert_eq!(row.value_type, "Integer");
    }

    #[test]
    fn display_does_not_panic_on_full_info() {
        let info = CollectionInfo {
            collection: "cities".to_string(),
            strategy: "geojson".to_string(),
            strategy_description: "GeoJSON-shaped documents".to_string(),
            attributes: vec![AttributeInfo {
                name: "geometry".to_string(),
                value_type: "Geometry".to_string(),
            }],
            skipped: vec![SkippedFieldInfo {
                name: "tags".to_string(),
                found: "array".to_string(),
            }],
        };
        display_collection_info(&info);
    }
}
