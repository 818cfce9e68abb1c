//! Shared, read-only input of every artifact generator.

use crudgen_core::Namespaces;
use crudgen_schema::ModelSpec;

use crate::{
    NameTable,
    paths::{APPLICATION_NS, CONTROLLERS_NS, DTO_DIR, REQUEST_DIR},
};

/// Model, derived names and root namespaces of one slice.
#[derive(Debug, Clone)]
pub struct SliceContext<'a> {
    pub model: &'a ModelSpec,
    pub names: &'a NameTable,
    pub namespaces: &'a Namespaces,
}

impl<'a> SliceContext<'a> {
    pub fn new(model: &'a ModelSpec, names: &'a NameTable, namespaces: &'a Namespaces) -> Self {
        Self {
            model,
            names,
            namespaces,
        }
    }

    /// `<api>.Application.<Entity>`
    pub fn entity_ns(&self) -> String {
        format!("{}.{}.{}", self.namespaces.api, APPLICATION_NS, self.names.entity)
    }

    /// `<api>.Application.<Entity>.Dto`
    pub fn dto_ns(&self) -> String {
        format!("{}.{}", self.entity_ns(), DTO_DIR)
    }

    /// `<api>.Application.<Entity>.Request`
    pub fn request_ns(&self) -> String {
        format!("{}.{}", self.entity_ns(), REQUEST_DIR)
    }

    pub fn create_ns(&self) -> String {
        format!("{}.{}", self.entity_ns(), self.names.create_family)
    }

    pub fn update_ns(&self) -> String {
        format!("{}.{}", self.entity_ns(), self.names.update_family)
    }

    pub fn delete_ns(&self) -> String {
        format!("{}.{}", self.entity_ns(), self.names.delete_family)
    }

    /// `<api>.Controllers`
    pub fn controllers_ns(&self) -> String {
        format!("{}.{}", self.namespaces.api, CONTROLLERS_NS)
    }

    /// `<core>.Data`, home of the repository abstractions.
    pub fn core_data_ns(&self) -> String {
        format!("{}.Data", self.namespaces.core)
    }

    /// `<core>.Models`
    pub fn core_models_ns(&self) -> String {
        format!("{}.Models", self.namespaces.core)
    }

    /// `<core>.Web`, home of `BaseController`.
    pub fn core_web_ns(&self) -> String {
        format!("{}.Web", self.namespaces.core)
    }

    /// Fully qualified domain type.
    ///
    /// Qualified because `<Entity>` alone resolves to the entity namespace
    /// inside the generated files.
    pub fn model_type(&self) -> String {
        format!("{}.{}", self.core_models_ns(), self.names.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces() {
        let model = ModelSpec::new("Product", []);
        let names = NameTable::derive("Product");
        let namespaces = Namespaces {
            api: "Shop.Api".to_string(),
            core: "Shop.Core".to_string(),
        };
        let ctx = SliceContext::new(&model, &names, &namespaces);

        assert_eq!(ctx.entity_ns(), "Shop.Api.Application.Product");
        assert_eq!(ctx.dto_ns(), "Shop.Api.Application.Product.Dto");
        assert_eq!(ctx.request_ns(), "Shop.Api.Application.Product.Request");
        assert_eq!(ctx.create_ns(), "Shop.Api.Application.Product.CreateProduct");
        assert_eq!(ctx.update_ns(), "Shop.Api.Application.Product.UpdateProduct");
        assert_eq!(ctx.delete_ns(), "Shop.Api.Application.Product.DeleteProduct");
        assert_eq!(ctx.controllers_ns(), "Shop.Api.Controllers");
        assert_eq!(ctx.core_data_ns(), "Shop.Core.Data");
        assert_eq!(ctx.model_type(), "Shop.Core.Models.Product");
    }
}
