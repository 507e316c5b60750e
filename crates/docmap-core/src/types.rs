//! Display-facing types for collection inspection.
//!
//! These structures carry what tooling shows about a mapped collection: the
//! chosen strategy, the inferred attribute list, and any skipped fields.
//! Physical paths stay out; they are strategy plumbing, not part of the
//! feature view.

/// Information about a mapped collection.
#[derive(Debug, Clone)]
pub struct CollectionInfo {
    /// Collection identity
    pub collection: String,
    /// Short name of the mapping strategy
    pub strategy: String,
    /// Strategy description
    pub strategy_description: String,
    /// Inferred attributes in column order, geometry first
    pub attributes: Vec<AttributeInfo>,
    /// Fields omitted from the schema during inference
    pub skipped: Vec<SkippedFieldInfo>,
}

/// Information about one inferred attribute.
#[derive(Debug, Clone)]
pub struct AttributeInfo {
    /// Attribute name
    pub name: String,
    /// Value type label
    pub value_type: String,
}

/// Information about a field omitted during inference.
#[derive(Debug, Clone)]
pub struct SkippedFieldInfo {
    /// Document key that was skipped
    pub name: String,
    /// JSON kind of the sampled value
    pub found: String,
}
