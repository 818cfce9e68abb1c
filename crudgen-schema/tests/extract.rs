//! Extraction behaviour on realistic entity definitions.

use crudgen_schema::{FieldSpec, extract};

const PRODUCT: &str = r#"
using System;

namespace Shop.Core.Models
{
    public class Product : BaseEntity
    {
        public long Id { get; set; }
        public string Name { get; set; }
        public decimal Price { get; set; }
        public DateTime CreatedAt { get; set; }
        public virtual Category Category { get; set; }
    }
}
"#;

#[test]
fn test_product_fields() {
    let extraction = extract(PRODUCT, "Product.cs").unwrap();

    assert_eq!(extraction.model.class_name, "Product");
    assert_eq!(
        extraction.model.fields,
        [
            FieldSpec::new("string", "Name"),
            FieldSpec::new("decimal", "Price"),
            FieldSpec::new("DateTime", "CreatedAt"),
        ]
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let first = extract(PRODUCT, "Product.cs").unwrap();
    let second = extract(PRODUCT, "Product.cs").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_identity_excluded_in_any_case() {
    for name in ["id", "Id", "ID", "iD"] {
        let src = format!(
            "public class Tag {{ public int {name} {{ get; set; }} public string Label {{ get; set; }} }}"
        );
        let extraction = extract(&src, "Tag.cs").unwrap();

        assert_eq!(extraction.model.fields, [FieldSpec::new("string", "Label")]);
        assert_eq!(extraction.excluded[0].name, name);
    }
}

#[test]
fn test_virtual_collections_excluded() {
    let src = r#"
        public class Category
        {
            public string Title { get; set; }
            public virtual ICollection<Product> Products { get; set; }
            public long ParentId { get; set; }
        }
    "#;
    let extraction = extract(src, "Category.cs").unwrap();

    assert_eq!(
        extraction.model.field_names().collect::<Vec<_>>(),
        ["Title", "ParentId"]
    );
}

#[test]
fn test_declaration_order_preserved() {
    let src = r#"
        public class Event
        {
            public string Zeta { get; set; }
            public string Alpha { get; set; }
            public int Middle { get; set; }
        }
    "#;
    let extraction = extract(src, "Event.cs").unwrap();

    assert_eq!(
        extraction.model.field_names().collect::<Vec<_>>(),
        ["Zeta", "Alpha", "Middle"]
    );
}

#[test]
fn test_extraction_serializes_for_inspection() {
    let extraction = extract(PRODUCT, "Product.cs").unwrap();
    let json = serde_json::to_value(&extraction).unwrap();

    assert_eq!(json["model"]["class_name"], "Product");
    assert_eq!(json["model"]["fields"][2]["type"], "DateTime");
    assert_eq!(json["excluded"].as_array().unwrap().len(), 2);
}
