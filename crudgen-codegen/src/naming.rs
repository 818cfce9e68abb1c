//! Naming Deriver: every identifier a slice uses, derived from the class name.

use serde::Serialize;

/// Identifiers shared by all artifacts of one slice.
///
/// Every entry is a pure function of the class name, so two artifacts that
/// refer to the same type always spell it the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTable {
    /// The source class name, e.g. `Product`.
    pub entity: String,
    /// `ProductDto`
    pub dto: String,
    /// `ProductRequest`
    pub request: String,
    /// `IQueryProduct`
    pub query_interface: String,
    /// `QueryProduct`
    pub query_class: String,
    /// `CreateProduct`, the folder and namespace segment of the create family.
    pub create_family: String,
    pub create_command: String,
    pub create_result: String,
    pub create_validation: String,
    /// `UpdateProduct`
    pub update_family: String,
    pub update_command: String,
    /// `DeleteProduct`
    pub delete_family: String,
    pub delete_command: String,
    /// `ProductHandler`
    pub handler: String,
    /// `ProductController`
    pub controller: String,
}

impl NameTable {
    pub fn derive(class_name: &str) -> Self {
        let create_family = format!("Create{class_name}");
        let update_family = format!("Update{class_name}");
        let delete_family = format!("Delete{class_name}");

        Self {
            entity: class_name.to_string(),
            dto: format!("{class_name}Dto"),
            request: format!("{class_name}Request"),
            query_interface: format!("IQuery{class_name}"),
            query_class: format!("Query{class_name}"),
            create_command: format!("{create_family}Command"),
            create_result: format!("{create_family}Result"),
            create_validation: format!("{create_family}Validation"),
            update_command: format!("{update_family}Command"),
            delete_command: format!("{delete_family}Command"),
            handler: format!("{class_name}Handler"),
            controller: format!("{class_name}Controller"),
            create_family,
            update_family,
            delete_family,
        }
    }
}
