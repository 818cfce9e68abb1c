//! Generate operation - slice generation from an extracted model.

use crudgen_codegen::Generator;
use crudgen_core::RunConfig;
use crudgen_schema::Extraction;
use eyre::{Context, Result};

use super::skipped_warning;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    extraction: &Extraction,
    config: &RunConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let model = &extraction.model;
    tracing::info!(
        class = %model.class_name,
        fields = model.fields.len(),
        excluded = extraction.excluded.len(),
        skipped = extraction.skipped.len(),
        "extracted model"
    );

    let generator = Generator::new(model, config);
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let generated = generator
            .generate()
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            root: generated.root,
            files: generator
                .layout()
                .plans()
                .iter()
                .map(|p| p.relative_path.clone())
                .collect(),
            created: generated.stats.created,
            replaced: generated.stats.replaced,
        })
    };

    Ok(GenerateReport {
        class_name: model.class_name.clone(),
        warnings: extraction.skipped.iter().map(skipped_warning).collect(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use crudgen_schema::extract;
    use tempfile::TempDir;

    use super::*;

    const ORDER: &str = "public class Order\n{\n    public string Number { get; set; }\n    public decimal Total { get; }\n}\n";

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("out");
        let extraction = extract(ORDER, "Order.cs").unwrap();
        let config = RunConfig::new("Order.cs").with_output_root(&root);

        let report = generate(&extraction, &config, GenerateOptions { dry_run: true }).unwrap();

        assert!(!root.exists());
        match report.result {
            GenerationResult::Preview(preview) => assert_eq!(preview.files.len(), 10),
            GenerationResult::Written(_) => panic!("dry run wrote files"),
        }
    }

    #[test]
    fn test_report_names_class_and_warnings() {
        let temp = TempDir::new().unwrap();
        let extraction = extract(ORDER, "Order.cs").unwrap();
        let config = RunConfig::new("Order.cs").with_output_root(temp.path());

        let report = generate(&extraction, &config, GenerateOptions { dry_run: false }).unwrap();

        assert_eq!(report.class_name, "Order");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("skipped `Total` (line 4)"));
        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.created, 10);
                assert_eq!(written.files.len(), 10);
                assert!(temp.path().join("Controllers/OrderController.cs").is_file());
            }
            GenerationResult::Preview(_) => panic!("expected files on disk"),
        }
    }
}
