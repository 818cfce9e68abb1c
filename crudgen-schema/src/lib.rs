//! Schema extraction for crudgen.
//!
//! Turns the source text of a single type definition into a [`ModelSpec`]:
//! the class name plus its ordered scalar properties.
//!
//! ```
//! use crudgen_schema::{FieldSpec, extract};
//!
//! let src = r#"
//!     public class Product
//!     {
//!         public long Id { get; set; }
//!         public string Name { get; set; }
//!     }
//! "#;
//! let extraction = extract(src, "Product.cs").unwrap();
//!
//! assert_eq!(extraction.model.class_name, "Product");
//! assert_eq!(extraction.model.fields, [FieldSpec::new("string", "Name")]);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod lexer;
mod model;
mod parser;

pub use error::{Error, Result};
pub use file::ModelFile;
pub use lexer::{Token, TokenKind, tokenize};
pub use model::{FieldSpec, ModelSpec, is_excluded};
pub use parser::{Extraction, SkipReason, SkippedMember, extract};
