//! Core operations.
//!
//! This module contains the business logic for crudgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod config;
pub mod generate;
pub mod inspect;

pub use config::load_config;
pub use generate::{GenerateOptions, generate};
pub use inspect::inspect;

use crudgen_schema::SkippedMember;

/// One-line warning for a member the extractor passed over.
pub(crate) fn skipped_warning(member: &SkippedMember) -> String {
    format!(
        "skipped `{}` (line {}): {}",
        member.name, member.line, member.reason
    )
}
