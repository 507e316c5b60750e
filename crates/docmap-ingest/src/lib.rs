//! Ingestible-unit classification for `docmap`.
//!
//! Upstream ingestion flows hand a filesystem path to the factory here and
//! receive an opaque unit telling them how to proceed: walk a directory,
//! unpack an archive, or load a single spatial file. Archive expansion and
//! temporary-file cleanup belong to the ingestion pipeline, not to this
//! crate.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Archive extensions the ingestion pipeline knows how to unpack.
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "tar", "gz", "tgz", "bz2", "tbz2", "7z"];

/// Errors from ingest classification.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The path does not exist
    #[error("Ingest path not found: '{path}'")]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// The path could not be inspected
    #[error("Failed to inspect ingest path '{path}': {source}")]
    Io {
        /// The path being inspected
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
}

/// An ingested filesystem unit, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestUnit {
    /// A directory to be walked for spatial files.
    Directory(PathBuf),
    /// A compressed archive to be unpacked before ingestion.
    Archive(PathBuf),
    /// A single spatial file.
    SpatialFile(PathBuf),
}

impl IngestUnit {
    /// Classifies `path` by filesystem inspection.
    ///
    /// Directories win over everything; files with a known archive extension
    /// classify as archives; any other file is a spatial file. Format
    /// validation happens later, at ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::NotFound`] for a missing path and
    /// [`IngestError::Io`] when the path cannot be inspected.
    pub fn classify(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                IngestError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let unit = if metadata.is_dir() {
            Self::Directory(path.to_path_buf())
        } else if is_archive(path) {
            Self::Archive(path.to_path_buf())
        } else {
            Self::SpatialFile(path.to_path_buf())
        };
        debug!("classified '{}' as {}", path.display(), unit.kind());
        Ok(unit)
    }

    /// The classified path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::Archive(path) | Self::SpatialFile(path) => path,
        }
    }

    /// Base name of the unit (file stem, without extension).
    #[must_use]
    pub fn name(&self) -> String {
        self.path()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Short label for display and logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Directory(_) => "directory",
            Self::Archive(_) => "archive",
            Self::SpatialFile(_) => "spatial file",
        }
    }
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
