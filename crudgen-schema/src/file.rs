use std::path::{Path, PathBuf};

use crate::{Error, Extraction, ModelSpec, Result, extract};

/// A type definition file with both raw content and extracted model.
#[derive(Debug)]
pub struct ModelFile {
    path: PathBuf,
    content: String,
    extraction: Extraction,
}

impl ModelFile {
    /// Read and extract a type definition file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let extraction = extract(&content, &filename)?;

        Ok(Self {
            path,
            content,
            extraction,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the full extraction result.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Get the extracted model.
    pub fn model(&self) -> &ModelSpec {
        &self.extraction.model
    }

    pub fn into_extraction(self) -> Extraction {
        self.extraction
    }
}
