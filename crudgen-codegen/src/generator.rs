//! Slice generation: plan, render every artifact, then write.

use std::path::{Path, PathBuf};

use crudgen_core::RunConfig;
use crudgen_schema::ModelSpec;
use eyre::Result;

use crate::{
    ArtifactRegistry, GeneratedArtifact, Layout, NameTable, PreviewFile, SliceContext, WriteStats,
    generators,
};

/// Outcome of [`Generator::generate`].
#[derive(Debug)]
pub struct GenerateResult {
    /// Output root the slice was written under.
    pub root: PathBuf,
    pub stats: WriteStats,
}

/// Generates the CRUD slice of one model.
pub struct Generator<'a> {
    model: &'a ModelSpec,
    config: &'a RunConfig,
    names: NameTable,
    layout: Layout,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ModelSpec, config: &'a RunConfig) -> Self {
        let names = NameTable::derive(&model.class_name);
        let layout = Layout::plan(&names, &config.extension);
        Self {
            model,
            config,
            names,
            layout,
        }
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn context(&self) -> SliceContext<'_> {
        SliceContext::new(self.model, &self.names, &self.config.namespaces)
    }

    /// Render every artifact in plan order.
    pub fn render(&self) -> ArtifactRegistry {
        let ctx = self.context();
        let mut registry = ArtifactRegistry::new();
        for plan in self.layout.plans() {
            let content = generators::render(plan.kind, &ctx);
            registry.register(GeneratedArtifact::new(plan.clone(), content));
        }
        registry
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.render().preview()
    }

    /// Write the slice under the configured output root.
    pub fn generate(&self) -> Result<GenerateResult> {
        self.generate_into(&self.config.output_root)
    }

    /// Write the slice under `root`.
    ///
    /// Every directory is created before the first file is written. Existing
    /// files are overwritten; a failure part way leaves earlier files in place.
    pub fn generate_into(&self, root: &Path) -> Result<GenerateResult> {
        let registry = self.render();

        tracing::info!(
            class = %self.names.entity,
            root = %root.display(),
            "generating slice"
        );
        self.layout.create_dirs(root)?;
        let stats = registry.write_all(root)?;
        tracing::info!(
            created = stats.created,
            replaced = stats.replaced,
            "slice written"
        );

        Ok(GenerateResult {
            root: root.to_path_buf(),
            stats,
        })
    }
}
