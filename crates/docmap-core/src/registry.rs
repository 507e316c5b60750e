//! Registry of document mapping strategies and their capabilities.
//!
//! This module provides a static registry of the document "shapes" the
//! mapping layer understands, including the current support status
//! (supported, planned, or not supported) for each operation family
//! (schema inference, geometry read, geometry write). The host engine and
//! the CLI consult the registry to dispatch a collection to a strategy.
//!
//! # Examples
//!
//! ```
//! use docmap_core::registry::{find_strategy, get_available_strategies};
//!
//! // Find a specific strategy
//! let geojson = find_strategy("geojson").expect("geojson strategy should exist");
//! assert!(geojson.capabilities.infer.is_supported());
//!
//! // List all strategies with supported operations
//! let available = get_available_strategies();
//! for strategy in available {
//!     println!("{}: {}", strategy.short_name, strategy.description);
//! }
//! ```

/// Support status for a specific strategy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// The operation is fully supported and implemented.
    Supported,
    /// The operation is not supported by the strategy.
    NotSupported,
    /// The operation is planned for future implementation.
    Planned,
}

impl SupportStatus {
    /// Returns `true` if the operation is fully supported and implemented.
    ///
    /// # Examples
    ///
    /// ```
    /// use docmap_core::registry::SupportStatus;
    ///
    /// assert!(SupportStatus::Supported.is_supported());
    /// assert!(!SupportStatus::Planned.is_supported());
    /// ```
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, SupportStatus::Supported)
    }

    /// Returns `true` if the operation is supported or planned (i.e., not
    /// explicitly unsupported).
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, SupportStatus::NotSupported)
    }

    /// Returns the string representation of this support status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SupportStatus::Supported => "Supported",
            SupportStatus::NotSupported => "Not Supported",
            SupportStatus::Planned => "Planned",
        }
    }
}

/// Operation families a mapping strategy can support.
///
/// Schema inference, geometry decoding, and geometry encoding are separable:
/// a strategy may be able to read a shape it cannot (yet) write back.
#[derive(Debug, Clone, Copy)]
pub struct StrategyCapabilities {
    /// Support status for inferring a feature schema from sample documents.
    pub infer: SupportStatus,
    /// Support status for decoding the store-native geometry encoding.
    pub read: SupportStatus,
    /// Support status for encoding geometry back into documents.
    pub write: SupportStatus,
}

impl StrategyCapabilities {
    /// Returns `true` if at least one operation is supported or planned.
    #[must_use]
    pub fn has_any_support(&self) -> bool {
        self.infer.is_available() || self.read.is_available() || self.write.is_available()
    }

    /// Returns `true` if at least one operation is fully supported.
    #[must_use]
    pub fn has_supported_operation(&self) -> bool {
        self.infer.is_supported() || self.read.is_supported() || self.write.is_supported()
    }
}

/// Document mapping strategy definition.
///
/// A strategy represents support for one document shape (field layout
/// convention). Each strategy has a short name used for dispatch, a
/// descriptive text, and a set of capabilities.
///
/// # Examples
///
/// ```
/// use docmap_core::registry::{Strategy, SupportStatus};
///
/// let strategy = Strategy::new(
///     "geojson",
///     "GeoJSON-shaped documents",
///     SupportStatus::Supported,
///     SupportStatus::Supported,
///     SupportStatus::Supported,
/// );
///
/// assert_eq!(strategy.short_name, "geojson");
/// assert!(strategy.capabilities.read.is_supported());
/// ```
#[derive(Debug, Clone)]
pub struct Strategy {
    /// Short name used for dispatch and in the CLI (e.g., `"geojson"`).
    pub short_name: &'static str,
    /// Descriptive text for display purposes.
    pub description: &'static str,
    /// Operations supported by this strategy.
    pub capabilities: StrategyCapabilities,
}

impl Strategy {
    /// Creates a new strategy definition with the specified capabilities.
    #[must_use]
    pub const fn new(
        short_name: &'static str,
        description: &'static str,
        infer: SupportStatus,
        read: SupportStatus,
        write: SupportStatus,
    ) -> Self {
        Self {
            short_name,
            description,
            capabilities: StrategyCapabilities { infer, read, write },
        }
    }
}

/// Returns the complete registry of known mapping strategies.
///
/// Every strategy is returned regardless of support status; filter with
/// [`get_available_strategies`] for the implemented subset.
#[must_use]
pub fn get_strategies() -> Vec<Strategy> {
    use SupportStatus::{NotSupported, Planned, Supported};

    vec![
        Strategy::new(
            "geojson",
            "GeoJSON-shaped documents (geometry object and properties bag)",
            Supported,
            Supported,
            Supported,
        ),
        Strategy::new(
            "flat",
            "Flat documents with coordinate-pair geometry",
            Supported,
            Supported,
            Supported,
        ),
        Strategy::new(
            "esrijson",
            "ESRI JSON-shaped documents",
            Planned,
            Planned,
            Planned,
        ),
        Strategy::new(
            "wkt-string",
            "Documents storing geometry as WKT strings",
            Planned,
            Planned,
            NotSupported,
        ),
        Strategy::new(
            "geobuf",
            "Documents embedding protobuf-encoded geometry",
            NotSupported,
            NotSupported,
            NotSupported,
        ),
    ]
}

/// Returns all strategies that have at least one fully supported operation.
///
/// # Examples
///
/// ```
/// use docmap_core::registry::get_available_strategies;
///
/// let available = get_available_strategies();
/// for strategy in available {
///     println!("{} is ready to use", strategy.short_name);
/// }
/// ```
#[must_use]
pub fn get_available_strategies() -> Vec<Strategy> {
    get_strategies()
        .into_iter()
        .filter(|s| s.capabilities.has_supported_operation())
        .collect()
}

/// Finds a strategy by its short name (case-insensitive).
///
/// Returns `None` if no strategy with the given name exists in the registry.
///
/// # Examples
///
/// ```
/// use docmap_core::registry::find_strategy;
///
/// let strategy = find_strategy("GeoJSON").expect("geojson should exist");
/// assert_eq!(strategy.short_name, "geojson");
///
/// assert!(find_strategy("carrier-pigeon").is_none());
/// ```
#[must_use]
pub fn find_strategy(name: &str) -> Option<Strategy> {
    get_strategies()
        .into_iter()
        .find(|s| s.short_name.eq_ignore_ascii_case(name))
}

/// Returns all strategy short names in alphabetically sorted order.
#[must_use]
pub fn get_strategy_names() -> Vec<&'static str> {
    let mut names: Vec<_> = get_strategies().iter().map(|s| s.short_name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_strategy() {
        let strategy = find_strategy("geojson");
        assert!(strategy.is_some());
        assert_eq!(strategy.unwrap().short_name, "geojson");
    }

    #[test]
    fn test_find_strategy_case_insensitive() {
        let strategy = find_strategy("FLAT");
        assert!(strategy.is_some());
        assert_eq!(strategy.unwrap().short_name, "flat");
    }

    #[test]
    fn test_available_strategies() {
        let strategies = get_available_strategies();
        assert_eq!(strategies.len(), 2);
        assert!(strategies.iter().any(|s| s.short_name == "geojson"));
        assert!(strategies.iter().any(|s| s.short_name == "flat"));
    }

    #[test]
    fn test_strategy_names_are_sorted() {
        let names = get_strategy_names();
        assert!(names.contains(&"geojson"));
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_support_status() {
        assert!(SupportStatus::Supported.is_supported());
        assert!(!SupportStatus::NotSupported.is_supported());
        assert!(!SupportStatus::Planned.is_supported());

        assert!(SupportStatus::Supported.is_available());
        assert!(!SupportStatus::NotSupported.is_available());
        assert!(SupportStatus::Planned.is_available());
    }

    #[test]
    fn test_planned_strategy_has_no_supported_operation() {
        let strategy = find_strategy("esrijson").unwrap();
        assert!(strategy.capabilities.has_any_support());
        assert!(!strategy.capabilities.has_supported_operation());
    }
}
