use super::{IDENTITY_PROPERTY, namespace_file};
use crate::SliceContext;

/// `Delete<Entity>Command`: identity only.
pub fn render(ctx: &SliceContext<'_>) -> String {
    namespace_file(["MediatR"], &ctx.delete_ns(), |b| {
        b.line(&format!(
            "public class {} : IRequest<bool>",
            ctx.names.delete_command
        ))
        .braces(|b| b.line(IDENTITY_PROPERTY))
    })
}
