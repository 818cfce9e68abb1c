use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(crudgen::input_not_found),
        help("check the INPUT path or `input_path` in crudgen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no class definition found")]
    #[diagnostic(
        code(crudgen::missing_class),
        help("the input must declare a type, e.g. `public class Product {{ ... }}`")
    )]
    MissingClass {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("class '{name}' is never closed")]
    #[diagnostic(
        code(crudgen::unterminated_class),
        help("add the missing `}}` at the end of the class body")
    )]
    UnterminatedClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("class body opened here")]
        span: SourceSpan,
        name: String,
    },
}

impl Error {
    pub fn missing_class(src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::MissingClass {
            src: NamedSource::new(filename, src.to_string()),
        })
    }

    pub fn unterminated_class(
        name: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::UnterminatedClass {
            src: NamedSource::new(filename, src.to_string()),
            span: span.into(),
            name: name.into(),
        })
    }
}
