//! Directory names of the generated tree.
//!
//! Centralizes the fixed segments so the layout planner and the generated
//! namespaces never disagree.

/// Directory holding one subdirectory per entity.
pub const APPLICATION_DIR: &str = "Application";

/// Shared directory for every entity's controller.
pub const CONTROLLERS_DIR: &str = "Controllers";

/// Per-entity directory for the data-transfer object.
pub const DTO_DIR: &str = "Dto";

/// Per-entity directory for the HTTP request shape.
pub const REQUEST_DIR: &str = "Request";

/// Namespace segment under the API root for application code.
pub const APPLICATION_NS: &str = APPLICATION_DIR;

/// Namespace segment under the API root for controllers.
pub const CONTROLLERS_NS: &str = CONTROLLERS_DIR;
