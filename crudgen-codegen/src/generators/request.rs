//! `<Entity>Request`: body of create and update calls.

use super::property_class;
use crate::SliceContext;

pub fn render(ctx: &SliceContext<'_>) -> String {
    property_class(
        &[],
        &ctx.request_ns(),
        &format!("public class {}", ctx.names.request),
        false,
        &ctx.model.fields,
    )
}
