//! Inspect operation - extraction only.

use crudgen_codegen::NameTable;
use crudgen_schema::ModelFile;

use crate::reports::InspectReport;

/// Execute the inspect operation.
pub fn inspect(file: &ModelFile) -> InspectReport {
    let extraction = file.extraction();

    InspectReport {
        source: file.path().to_path_buf(),
        model: extraction.model.clone(),
        names: NameTable::derive(&extraction.model.class_name),
        excluded: extraction.excluded.clone(),
        skipped: extraction.skipped.clone(),
    }
}
