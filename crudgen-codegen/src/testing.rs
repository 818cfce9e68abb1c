//! Test fixtures for artifact generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crudgen_core::Namespaces;
use crudgen_schema::{FieldSpec, ModelSpec};

use crate::{NameTable, SliceContext};

/// Canonical model: `Product` with a string, a decimal and a timestamp.
pub fn product_model() -> ModelSpec {
    ModelSpec::new(
        "Product",
        [
            FieldSpec::new("string", "Name"),
            FieldSpec::new("decimal", "Price"),
            FieldSpec::new("DateTime", "CreatedAt"),
        ],
    )
}

/// Owns everything a [`SliceContext`] borrows.
pub struct Fixture {
    pub model: ModelSpec,
    pub names: NameTable,
    pub namespaces: Namespaces,
}

impl Fixture {
    pub fn new(model: ModelSpec) -> Self {
        let names = NameTable::derive(&model.class_name);
        Self {
            model,
            names,
            namespaces: Namespaces::default(),
        }
    }

    pub fn product() -> Self {
        Self::new(product_model())
    }

    /// A model with no scalar fields at all.
    pub fn empty(class_name: &str) -> Self {
        Self::new(ModelSpec::new(class_name, []))
    }

    pub fn ctx(&self) -> SliceContext<'_> {
        SliceContext::new(&self.model, &self.names, &self.namespaces)
    }
}
