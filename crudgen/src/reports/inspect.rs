//! Inspect command report data structures.

use std::path::PathBuf;

use crudgen_codegen::NameTable;
use crudgen_schema::{FieldSpec, ModelSpec, SkippedMember};
use serde::Serialize;

use super::output::{Output, Report};
use crate::ops::skipped_warning;

/// What the extractor recovered from one entity class.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// File the class was read from.
    pub source: PathBuf,
    pub model: ModelSpec,
    /// Identifiers the generated slice would use.
    pub names: NameTable,
    /// Properties dropped by the identity/navigation rule.
    pub excluded: Vec<FieldSpec>,
    /// Property-like members that were not recognized.
    pub skipped: Vec<SkippedMember>,
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Class", &self.model.class_name);
        out.key_value("Source", &self.source.display().to_string());
        out.newline();

        out.section(&format!("Fields ({})", self.model.fields.len()));
        for field in &self.model.fields {
            out.list_item(&format!("{} {}", field.ty, field.name));
        }

        if !self.excluded.is_empty() {
            out.newline();
            out.section(&format!("Excluded ({})", self.excluded.len()));
            for field in &self.excluded {
                out.list_item(&format!("{} {}", field.ty, field.name));
            }
        }

        for member in &self.skipped {
            out.warning(&skipped_warning(member));
        }
    }
}
