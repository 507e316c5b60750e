//! `docmap-core` is the orchestration layer of the `docmap` project.
//!
//! This crate connects the mapping-strategy crates to callers:
//! - **Strategy Registry**: a static registry of document mapping strategies
//!   and their capabilities ([`registry`]).
//! - **Operations**: strategy dispatch, schema inference for a named
//!   collection, and geometry extraction over document sets ([`operations`]).
//! - **Document loading**: parsing exported document files for tooling
//!   ([`source`]).
//!
//! The registry is the capability lookup consumed by the CLI and by host
//! engines embedding the mapping layer; per-collection registration and
//! schema caching remain the host's responsibility.

pub mod error;
pub mod operations;
pub mod registry;
pub mod source;
pub mod types;
