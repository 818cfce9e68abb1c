//! Artifact generators.
//!
//! One pure function per [`ArtifactKind`], all taking the same
//! [`SliceContext`]. No generator reads another's output; consistency comes
//! from the shared [`NameTable`](crate::NameTable) and field list.

mod controller;
mod create;
mod delete;
mod dto;
mod handler;
mod query;
mod request;
mod update;

use crudgen_schema::FieldSpec;

pub use query::MAX_PAGE_SIZE;

use crate::{ArtifactKind, CodeBuilder, SliceContext};

/// Signature shared by every generator.
pub type RenderFn = fn(&SliceContext<'_>) -> String;

/// A registry entry.
#[derive(Clone, Copy)]
pub struct ArtifactGenerator {
    pub kind: ArtifactKind,
    pub render: RenderFn,
}

/// Generator table, one entry per artifact kind in generation order.
pub const GENERATORS: [ArtifactGenerator; ArtifactKind::COUNT] = [
    ArtifactGenerator {
        kind: ArtifactKind::Dto,
        render: dto::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::Request,
        render: request::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::Query,
        render: query::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::Handler,
        render: handler::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::CreateCommand,
        render: create::render_command,
    },
    ArtifactGenerator {
        kind: ArtifactKind::CreateResult,
        render: create::render_result,
    },
    ArtifactGenerator {
        kind: ArtifactKind::CreateValidation,
        render: create::render_validation,
    },
    ArtifactGenerator {
        kind: ArtifactKind::UpdateCommand,
        render: update::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::DeleteCommand,
        render: delete::render,
    },
    ArtifactGenerator {
        kind: ArtifactKind::Controller,
        render: controller::render,
    },
];

/// Look up the generator for `kind`.
pub fn generator_for(kind: ArtifactKind) -> RenderFn {
    GENERATORS
        .iter()
        .find(|g| g.kind == kind)
        .map(|g| g.render)
        .unwrap_or_else(|| unreachable!("every artifact kind has a generator"))
}

/// Render the artifact of `kind`.
pub fn render(kind: ArtifactKind, ctx: &SliceContext<'_>) -> String {
    generator_for(kind)(ctx)
}

/// Identity property carried by Dto, Result, Update and Delete artifacts.
pub(crate) const IDENTITY_PROPERTY: &str = "public long Id { get; set; }";

pub(crate) fn property(ty: &str, name: &str) -> String {
    format!("public {} {} {{ get; set; }}", ty, name)
}

/// One property declaration per field, in model order.
pub(crate) fn properties(builder: CodeBuilder, fields: &[FieldSpec]) -> CodeBuilder {
    builder.each(fields, |b, field| b.line(&property(&field.ty, &field.name)))
}

/// `using` block, `namespace` line and braces around `body`.
pub(crate) fn namespace_file<I, S, F>(usings: I, namespace: &str, body: F) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnOnce(CodeBuilder) -> CodeBuilder,
{
    CodeBuilder::csharp()
        .usings(usings)
        .line(&format!("namespace {}", namespace))
        .braces(body)
        .build()
}

/// A file holding a single property-only class.
pub(crate) fn property_class(
    usings: &[&str],
    namespace: &str,
    header: &str,
    identity: bool,
    fields: &[FieldSpec],
) -> String {
    namespace_file(usings, namespace, |b| {
        b.line(header).braces(|b| {
            let b = b.when(identity, |b| b.line(IDENTITY_PROPERTY));
            properties(b, fields)
        })
    })
}
