//! Generate command report data structures.

use std::path::PathBuf;

use crudgen_codegen::PreviewFile;

use super::output::{Output, Report};

/// Report data from slice generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Class the slice was generated for.
    pub class_name: String,

    /// Members the extractor skipped.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output root.
    pub root: PathBuf,
    /// Written files, relative to the root.
    pub files: Vec<PathBuf>,
    pub created: usize,
    pub replaced: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "Generated CRUD slice for {} ({} files)",
            self.class_name,
            written.files.len()
        ));
        out.newline();

        out.key_value("Output", &written.root.display().to_string());
        for file in &written.files {
            out.added_item(&file.display().to_string());
        }

        if written.replaced > 0 {
            out.newline();
            out.preformatted(&format!(
                "{} created, {} overwritten",
                written.created, written.replaced
            ));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated for {}",
            preview.files.len(),
            self.class_name
        ));
    }
}
