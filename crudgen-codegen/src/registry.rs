//! Collects the rendered artifacts of a slice before anything is written.
//!
//! Rendering is pure and happens up front, so a run either has all ten
//! contents in hand or fails before touching the disk.

use std::path::{Path, PathBuf};

use crudgen_core::{WriteResult, write_file};
use eyre::Result;
use serde::Serialize;

use crate::{ArtifactKind, ArtifactPlan};

/// Final text of one artifact, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub plan: ArtifactPlan,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(plan: ArtifactPlan, content: impl Into<String>) -> Self {
        Self {
            plan,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.plan.kind
    }

    /// Full path under `root`.
    pub fn full_path(&self, root: &Path) -> PathBuf {
        root.join(&self.plan.relative_path)
    }

    /// Write this artifact under `root`, replacing any previous content.
    pub fn write(&self, root: &Path) -> Result<WriteResult> {
        write_file(&self.full_path(root), &self.content)
    }
}

/// Rendered artifacts in generation order.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: Vec<GeneratedArtifact>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    pub fn artifacts(&self) -> &[GeneratedArtifact] {
        &self.artifacts
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.kind() == kind)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Path and content pairs, without touching the disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.artifacts
            .iter()
            .map(|a| PreviewFile {
                kind: a.kind(),
                path: a.plan.relative_path.clone(),
                content: a.content.clone(),
            })
            .collect()
    }

    /// Write every artifact under `root`, in registration order.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn write_all(&self, root: &Path) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for artifact in &self.artifacts {
            let path = artifact.full_path(root);
            match artifact.write(root)? {
                WriteResult::Created => stats.created += 1,
                WriteResult::Replaced => stats.replaced += 1,
            }
            tracing::debug!(kind = %artifact.kind(), path = %path.display(), "wrote artifact");
            stats.paths.push(path);
        }

        Ok(stats)
    }
}

/// An artifact as it would be written.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewFile {
    pub kind: ArtifactKind,
    /// Path relative to the output root.
    pub path: PathBuf,
    pub content: String,
}

/// Statistics from a write pass.
#[derive(Debug, Default, Clone, Serialize)]
pub struct WriteStats {
    /// Files that did not exist before.
    pub created: usize,
    /// Files whose previous content was replaced.
    pub replaced: usize,
    /// Every written path, in write order.
    pub paths: Vec<PathBuf>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.created + self.replaced
    }
}
