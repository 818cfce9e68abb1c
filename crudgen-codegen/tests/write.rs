//! Writing a slice to disk.

use std::{fs, path::Path};

use crudgen_codegen::{ArtifactKind, Generator};
use crudgen_core::RunConfig;
use crudgen_schema::{FieldSpec, ModelSpec};
use tempfile::TempDir;

fn product() -> ModelSpec {
    ModelSpec::new(
        "Product",
        [
            FieldSpec::new("string", "Name"),
            FieldSpec::new("decimal", "Price"),
            FieldSpec::new("DateTime", "CreatedAt"),
        ],
    )
}

fn read_tree(root: &Path, paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| fs::read_to_string(root.join(p)).unwrap())
        .collect()
}

#[test]
fn test_writes_all_ten_files() {
    let temp = TempDir::new().unwrap();
    let model = product();
    let config = RunConfig::new("Product.cs");

    let result = Generator::new(&model, &config)
        .generate_into(temp.path())
        .unwrap();

    assert_eq!(result.stats.created, ArtifactKind::COUNT);
    assert_eq!(result.stats.replaced, 0);

    for path in [
        "Application/Product/Dto/ProductDto.cs",
        "Application/Product/Request/ProductRequest.cs",
        "Application/Product/IQueryProduct.cs",
        "Application/Product/ProductHandler.cs",
        "Application/Product/CreateProduct/CreateProductCommand.cs",
        "Application/Product/CreateProduct/CreateProductResult.cs",
        "Application/Product/CreateProduct/CreateProductValidation.cs",
        "Application/Product/UpdateProduct/UpdateProductCommand.cs",
        "Application/Product/DeleteProduct/DeleteProductCommand.cs",
        "Controllers/ProductController.cs",
    ] {
        assert!(temp.path().join(path).is_file(), "missing {path}");
    }
}

#[test]
fn test_second_run_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let model = product();
    let config = RunConfig::new("Product.cs");
    let generator = Generator::new(&model, &config);
    let paths: Vec<_> = generator
        .layout()
        .plans()
        .iter()
        .map(|p| p.relative_path.clone())
        .collect();

    generator.generate_into(temp.path()).unwrap();
    let first = read_tree(temp.path(), &paths);

    let result = generator.generate_into(temp.path()).unwrap();
    let second = read_tree(temp.path(), &paths);

    assert_eq!(first, second);
    assert_eq!(result.stats.created, 0);
    assert_eq!(result.stats.replaced, ArtifactKind::COUNT);
}

#[test]
fn test_overwrites_edited_files() {
    let temp = TempDir::new().unwrap();
    let model = product();
    let config = RunConfig::new("Product.cs");
    let generator = Generator::new(&model, &config);
    generator.generate_into(temp.path()).unwrap();

    let dto = temp.path().join("Application/Product/Dto/ProductDto.cs");
    fs::write(&dto, "// edited by hand\n").unwrap();
    generator.generate_into(temp.path()).unwrap();

    let content = fs::read_to_string(&dto).unwrap();
    assert!(content.starts_with("namespace Sabiuz.Api.Application.Product.Dto"));
}

#[test]
fn test_leaves_unrelated_files_alone() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("Controllers/HomeController.cs");
    fs::create_dir_all(other.parent().unwrap()).unwrap();
    fs::write(&other, "home").unwrap();

    let model = product();
    let config = RunConfig::new("Product.cs");
    Generator::new(&model, &config)
        .generate_into(temp.path())
        .unwrap();

    assert_eq!(fs::read_to_string(&other).unwrap(), "home");
}

#[test]
fn test_unwritable_root_fails() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("out");
    fs::write(&root, "not a directory").unwrap();

    let model = product();
    let config = RunConfig::new("Product.cs");
    let err = Generator::new(&model, &config)
        .generate_into(&root)
        .unwrap_err();

    assert!(format!("{err:?}").contains("failed to create directory"));
}
