use std::path::Path;

use eyre::{Context, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before and was created
    Created,
    /// An existing file was truncated and rewritten
    Replaced,
}

/// Create `dir` and all of its parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))
}

/// Write `content` as the full contents of `path`.
///
/// Missing parent directories are created. An existing file is truncated.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let existed = path.exists();
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(if existed {
        WriteResult::Replaced
    } else {
        WriteResult::Created
    })
}
