//! Custom error types for `docmap` orchestration.
//!
//! This module provides structured error handling using `thiserror`. The
//! mapping layer itself surfaces only its narrow taxonomy
//! ([`docmap_core_common::MapError`]); the variants here cover strategy
//! dispatch and the document-file tooling around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for `docmap` operations.
///
/// Uses `#[error(transparent)]` to delegate display formatting to the
/// underlying error variants.
#[derive(Debug, Error)]
pub enum DocMapError {
    /// Strategy-related errors (not found, unsupported operations, etc.)
    #[error(transparent)]
    Strategy(#[from] StrategyError),

    /// I/O and parse errors for document files
    #[error(transparent)]
    Io(#[from] IoError),

    /// Mapping-layer errors surfaced by a strategy
    #[error(transparent)]
    Mapping(#[from] docmap_core_common::MapError),
}

/// Strategy dispatch errors.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Strategy was not found in the registry
    #[error("Mapping strategy '{name}' not found. Available strategies: {available}")]
    NotFound {
        /// The requested strategy name
        name: String,
        /// Comma-separated list of available strategies
        available: String,
    },

    /// Strategy does not support the requested operation
    #[error("Mapping strategy '{strategy}' does not support {operation}")]
    OperationNotSupported {
        /// The strategy name
        strategy: String,
        /// The operation that's not supported (e.g., "schema inference")
        operation: String,
    },

    /// Strategy is registered but has no implementation yet
    #[error("Mapping strategy '{strategy}' is not yet implemented")]
    NotImplemented {
        /// The strategy name
        strategy: String,
    },
}

/// I/O and parse errors for document files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Failed to read a document file
    #[error("Failed to read document file '{path}': {source}")]
    Read {
        /// The file path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a document file
    #[error("Failed to parse documents in '{path}' at line {line}: {message}", line = line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Parse {
        /// The file path
        path: PathBuf,
        /// The line number where parsing failed (if available)
        line: Option<usize>,
        /// Description of the parse error
        message: String,
    },
}

/// Type alias for Results using [`DocMapError`].
pub type Result<T> = std::result::Result<T, DocMapError>;

impl DocMapError {
    /// Get a user-friendly error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Strategy(e) => e.user_message(),
            Self::Io(e) => e.to_string(),
            Self::Mapping(e) => e.to_string(),
        }
    }

    /// Get recovery suggestions if available.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::Strategy(e) => e.recovery_suggestion(),
            Self::Io(e) => e.recovery_suggestion(),
            Self::Mapping(docmap_core_common::MapError::NoSampleAvailable { .. }) => Some(
                "Provide at least one sample document, or configure the geometry-only policy."
                    .to_string(),
            ),
            Self::Mapping(_) => None,
        }
    }
}

impl StrategyError {
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { name, available } => {
                format!(
                    "Mapping strategy '{name}' not found.\n\nAvailable strategies:\n{}",
                    available
                        .split(", ")
                        .map(|s| format!("  - {s}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            },
            Self::OperationNotSupported { strategy, operation } => {
                format!("The '{strategy}' strategy does not support {operation}.")
            },
            Self::NotImplemented { .. } => self.to_string(),
        }
    }

    fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::NotFound { .. } => {
                Some("Run 'docmap mappers' to see all available mapping strategies.".to_string())
            },
            Self::OperationNotSupported { .. } | Self::NotImplemented { .. } => {
                Some("Try a different strategy that supports this operation.".to_string())
            },
        }
    }
}

impl IoError {
    fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::Read { .. } => {
                Some("Check that the file path is correct and the file exists.".to_string())
            },
            Self::Parse { .. } => Some(
                "The file must hold a JSON array of documents, a single document, \
                 or newline-delimited documents."
                    .to_string(),
            ),
        }
    }
}

/// Helper to create [`StrategyError::NotFound`] with the available strategies.
#[must_use]
pub fn strategy_not_found(name: &str) -> StrategyError {
    use crate::registry::get_strategy_names;

    let available = get_strategy_names().join(", ");
    StrategyError::NotFound {
        name: name.to_string(),
        available,
    }
}
