//! CRUD slice generation.
//!
//! Turns a [`ModelSpec`](crudgen_schema::ModelSpec) into the ten source
//! artifacts of a slice and writes them at their planned paths.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text building (CodeBuilder, Indent)
//! - [`naming`] - Every identifier of a slice, derived from the class name
//! - [`layout`] - Artifact kinds, relative paths and directories
//! - [`generators`] - One renderer per artifact kind
//! - [`registry`] - Rendered artifacts, preview and write pass
//! - [`generator`] - Plan, render and write a whole slice
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
pub mod context;
pub mod generator;
pub mod generators;
pub mod layout;
pub mod naming;
pub mod paths;
pub mod registry;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, Indent};
pub use context::SliceContext;
pub use generator::{GenerateResult, Generator};
pub use generators::{MAX_PAGE_SIZE, render};
pub use layout::{ArtifactKind, ArtifactPlan, Layout};
pub use naming::NameTable;
pub use registry::{ArtifactRegistry, GeneratedArtifact, PreviewFile, WriteStats};
