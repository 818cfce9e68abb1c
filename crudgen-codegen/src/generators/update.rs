use super::property_class;
use crate::SliceContext;

/// `Update<Entity>Command`: identity plus every field.
///
/// Unlike the create command it must name the record it changes.
pub fn render(ctx: &SliceContext<'_>) -> String {
    property_class(
        &["MediatR"],
        &ctx.update_ns(),
        &format!("public class {} : IRequest<bool>", ctx.names.update_command),
        true,
        &ctx.model.fields,
    )
}
