//! Core utilities and types for the crudgen scaffolding generator.
//!
//! This crate provides the pieces shared by every stage of a run:
//! the file writer and the run configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod file;

pub use config::{
    ConfigError, ConfigResult, DEFAULT_CONFIG_FILE, DEFAULT_EXTENSION, DEFAULT_OUTPUT_ROOT,
    NamespaceOverrides, Namespaces, RunConfig, RunConfigFile,
};
pub use file::{WriteResult, ensure_dir, write_file};
