//! Layout Planner: where each artifact of a slice lives.
//!
//! ```text
//! <root>/
//! ├── Application/<Entity>/
//! │   ├── Dto/<Entity>Dto
//! │   ├── Request/<Entity>Request
//! │   ├── IQuery<Entity>
//! │   ├── <Entity>Handler
//! │   ├── Create<Entity>/{Command, Result, Validation}
//! │   ├── Update<Entity>/Update<Entity>Command
//! │   └── Delete<Entity>/Delete<Entity>Command
//! └── Controllers/<Entity>Controller
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::Result;
use serde::Serialize;

use crate::{
    NameTable,
    paths::{APPLICATION_DIR, CONTROLLERS_DIR, DTO_DIR, REQUEST_DIR},
};

/// The ten artifacts making up a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ArtifactKind {
    Dto,
    Request,
    Query,
    Handler,
    CreateCommand,
    CreateResult,
    CreateValidation,
    UpdateCommand,
    DeleteCommand,
    Controller,
}

impl ArtifactKind {
    pub const COUNT: usize = 10;

    /// Every kind, in generation order.
    pub const ALL: [ArtifactKind; Self::COUNT] = [
        ArtifactKind::Dto,
        ArtifactKind::Request,
        ArtifactKind::Query,
        ArtifactKind::Handler,
        ArtifactKind::CreateCommand,
        ArtifactKind::CreateResult,
        ArtifactKind::CreateValidation,
        ArtifactKind::UpdateCommand,
        ArtifactKind::DeleteCommand,
        ArtifactKind::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Dto => "dto",
            ArtifactKind::Request => "request",
            ArtifactKind::Query => "query",
            ArtifactKind::Handler => "handler",
            ArtifactKind::CreateCommand => "create-command",
            ArtifactKind::CreateResult => "create-result",
            ArtifactKind::CreateValidation => "create-validation",
            ArtifactKind::UpdateCommand => "update-command",
            ArtifactKind::DeleteCommand => "delete-command",
            ArtifactKind::Controller => "controller",
        }
    }

    /// Directory of this artifact, relative to the output root.
    pub fn directory(&self, names: &NameTable) -> PathBuf {
        let entity = Path::new(APPLICATION_DIR).join(&names.entity);
        match self {
            ArtifactKind::Dto => entity.join(DTO_DIR),
            ArtifactKind::Request => entity.join(REQUEST_DIR),
            ArtifactKind::Query | ArtifactKind::Handler => entity,
            ArtifactKind::CreateCommand
            | ArtifactKind::CreateResult
            | ArtifactKind::CreateValidation => entity.join(&names.create_family),
            ArtifactKind::UpdateCommand => entity.join(&names.update_family),
            ArtifactKind::DeleteCommand => entity.join(&names.delete_family),
            ArtifactKind::Controller => PathBuf::from(CONTROLLERS_DIR),
        }
    }

    /// Type declared by this artifact; also its file stem.
    pub fn type_name<'a>(&self, names: &'a NameTable) -> &'a str {
        match self {
            ArtifactKind::Dto => &names.dto,
            ArtifactKind::Request => &names.request,
            ArtifactKind::Query => &names.query_interface,
            ArtifactKind::Handler => &names.handler,
            ArtifactKind::CreateCommand => &names.create_command,
            ArtifactKind::CreateResult => &names.create_result,
            ArtifactKind::CreateValidation => &names.create_validation,
            ArtifactKind::UpdateCommand => &names.update_command,
            ArtifactKind::DeleteCommand => &names.delete_command,
            ArtifactKind::Controller => &names.controller,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned location of one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPlan {
    pub kind: ArtifactKind,
    /// Path relative to the output root.
    pub relative_path: PathBuf,
}

/// Full plan of a run: every artifact path and the directories hosting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    plans: Vec<ArtifactPlan>,
    directories: Vec<PathBuf>,
}

impl Layout {
    /// Plan the slice for `names`, giving every file the extension `extension`.
    pub fn plan(names: &NameTable, extension: &str) -> Self {
        let plans = ArtifactKind::ALL
            .iter()
            .map(|kind| ArtifactPlan {
                kind: *kind,
                relative_path: kind
                    .directory(names)
                    .join(format!("{}.{}", kind.type_name(names), extension)),
            })
            .collect();

        let entity = Path::new(APPLICATION_DIR).join(&names.entity);
        let directories = vec![
            entity.join(&names.create_family),
            entity.join(&names.delete_family),
            entity.join(&names.update_family),
            entity.join(DTO_DIR),
            entity.join(REQUEST_DIR),
            PathBuf::from(CONTROLLERS_DIR),
        ];

        Self { plans, directories }
    }

    pub fn plans(&self) -> &[ArtifactPlan] {
        &self.plans
    }

    /// Directories that must exist before any artifact is written.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn plan_for(&self, kind: ArtifactKind) -> Option<&ArtifactPlan> {
        self.plans.iter().find(|p| p.kind == kind)
    }

    /// Create every planned directory under `root`.
    ///
    /// Safe to call on a tree that already exists.
    pub fn create_dirs(&self, root: &Path) -> Result<()> {
        for dir in &self.directories {
            let dir = root.join(dir);
            tracing::debug!(dir = %dir.display(), "ensuring directory");
            crudgen_core::ensure_dir(&dir)?;
        }
        Ok(())
    }
}
